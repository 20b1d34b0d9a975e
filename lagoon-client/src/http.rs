//! HTTP transport for the resort API
//!
//! Every call goes through [`HttpClient::execute`], which takes a fully
//! described [`ApiRequest`] and answers with the decoded JSON body. Typed
//! decoding lives in [`decode`] so the trait stays object-safe and a test
//! double only has to implement one method.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::response::{Envelope, ErrorBody, ValidationErrorBody};
use shared::util::now_millis;
use std::time::Duration;

use crate::payload::{MethodOverride, Payload};
use crate::{ClientConfig, ClientError, ClientResult};

/// Query parameter carrying the cache-busting timestamp
pub const CACHE_BUST_PARAM: &str = "_t";

/// One call against the API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub payload: Payload,
    /// Verb sent as `_method` inside a POST body
    pub method_override: Option<MethodOverride>,
    /// Ask for `_t=<millis>` on the URL
    pub cache_bust: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: Payload::Empty,
            method_override: None,
            cache_bust: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// GET for a collection; carries the cache-busting stamp
    pub fn list(path: impl Into<String>) -> Self {
        Self {
            cache_bust: true,
            ..Self::get(path)
        }
    }

    pub fn post(path: impl Into<String>, payload: Payload) -> Self {
        Self {
            payload,
            ..Self::new(Method::POST, path)
        }
    }

    /// POST with `_method=PUT`
    pub fn update(path: impl Into<String>, payload: Payload) -> Self {
        Self {
            method_override: Some(MethodOverride::Put),
            ..Self::post(path, payload)
        }
    }

    /// POST with `_method=DELETE`
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method_override: Some(MethodOverride::Delete),
            ..Self::post(path, Payload::Empty)
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Whether the server will treat this call as a write
    pub fn is_mutating(&self) -> bool {
        self.method != Method::GET
    }

    /// Body as it goes on the wire, with the spoofed verb folded in
    pub fn wire_payload(&self) -> ClientResult<Payload> {
        match self.method_override {
            Some(verb) => self.payload.clone().with_method_override(verb),
            None => Ok(self.payload.clone()),
        }
    }
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request and return the JSON body (`Value::Null` when empty)
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value>;
}

/// Decode a response body that may or may not be wrapped in `{ "data": ... }`
pub fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    let envelope: Envelope<T> = serde_json::from_value(value)
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    Ok(envelope.into_inner())
}

/// Decode a saved record.
///
/// Besides the bare and `data` shapes, some controllers answer
/// `{ "message": "Created", "<entity>": { ... } }`; the first nested object
/// that decodes as `T` is taken.
pub fn decode_record<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    let nested: Vec<Value> = match &value {
        Value::Object(map) => map.values().filter(|v| v.is_object()).cloned().collect(),
        _ => Vec::new(),
    };
    match decode(value) {
        Ok(record) => Ok(record),
        Err(first) => nested
            .into_iter()
            .find_map(|v| serde_json::from_value(v).ok())
            .ok_or(first),
    }
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    csrf_token: Option<String>,
    cache_bust: bool,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
            csrf_token: config.csrf_token.clone(),
            cache_bust: config.cache_bust,
        })
    }

    /// Base URL without the trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn set_csrf_token(&mut self, token: Option<String>) {
        self.csrf_token = token;
    }

    /// Fetch an HTML page and take the CSRF token from its meta tag
    pub async fn refresh_csrf(&mut self, page: &str) -> ClientResult<String> {
        let url = self.url(page);
        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(map_send_error)?;
        let html = response.error_for_status()?.text().await?;
        let token = crate::csrf::extract_meta_token(&html).ok_or_else(|| {
            ClientError::InvalidResponse(format!("no csrf-token meta tag on {page}"))
        })?;
        tracing::debug!(page, "CSRF token refreshed");
        self.csrf_token = Some(token.clone());
        Ok(token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn build(&self, request: &ApiRequest) -> ClientResult<reqwest::RequestBuilder> {
        let mut req = self
            .client
            .request(request.method.clone(), self.url(&request.path))
            .header(header::ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest");

        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        if request.is_mutating() {
            match &self.csrf_token {
                Some(csrf) => req = req.header("X-CSRF-TOKEN", csrf),
                None => tracing::debug!(path = %request.path, "mutating request without a CSRF token"),
            }
        }

        let mut query = request.query.clone();
        if request.cache_bust && self.cache_bust {
            query.push((CACHE_BUST_PARAM.to_string(), now_millis().to_string()));
        }
        if !query.is_empty() {
            req = req.query(&query);
        }

        req = match request.wire_payload()? {
            Payload::Empty => req,
            Payload::Json(body) => req.json(&body),
            Payload::Multipart(body) => req.multipart(body.into_form()?),
        };
        Ok(req)
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_status(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            ClientError::InvalidResponse(format!("body is not JSON ({e}): {}", snippet(&text)))
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
        let builder = self.build(&request)?;
        tracing::debug!(
            method = %request.method,
            spoofed = ?request.method_override.map(|m| m.as_str()),
            path = %request.path,
            multipart = request.payload.is_multipart(),
            "API request"
        );
        let response = builder.send().await.map_err(map_send_error)?;
        let result = Self::handle_response(response).await;
        if let Err(e) = &result {
            tracing::debug!(path = %request.path, error = %e, "API request failed");
        }
        result
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout(e.to_string())
    } else {
        ClientError::Http(e)
    }
}

/// Map a non-2xx response onto [`ClientError`]
pub(crate) fn error_from_status(status: StatusCode, text: &str) -> ClientError {
    let message = || {
        serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|b| b.text().map(str::to_string))
            .unwrap_or_else(|| snippet(text))
    };

    match status {
        StatusCode::UNPROCESSABLE_ENTITY => {
            let body: ValidationErrorBody = serde_json::from_str(text).unwrap_or_default();
            ClientError::Validation {
                message: body
                    .message
                    .unwrap_or_else(|| "The given data was invalid.".to_string()),
                errors: body.errors,
            }
        }
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(message()),
        StatusCode::NOT_FOUND => ClientError::NotFound(message()),
        _ if status.as_u16() == 419 => ClientError::CsrfMismatch,
        _ => match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) if body.text().is_some() => ClientError::Api {
                status: status.as_u16(),
                message: message(),
            },
            _ => ClientError::Internal(format!("HTTP {}: {}", status.as_u16(), snippet(text))),
        },
    }
}

fn snippet(text: &str) -> String {
    const MAX: usize = 200;
    let text = text.trim();
    match text.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
