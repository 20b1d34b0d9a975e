//! Request bodies and method spoofing
//!
//! The API sits behind a stack that only passes GET and POST, so updates and
//! deletes are POSTs carrying `_method` in the body (Laravel method
//! spoofing). A body is JSON unless it carries a file, then it is multipart.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::{ClientError, ClientResult};

/// Field name Laravel reads the spoofed verb from
pub const METHOD_FIELD: &str = "_method";

/// Verb carried inside a POST body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOverride {
    Put,
    Patch,
    Delete,
}

impl MethodOverride {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// File part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a local file; the content type is guessed from the extension
    pub fn from_path(field: impl Into<String>, path: &Path) -> ClientResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::Config(format!("no file name in {}", path.display())))?
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self::new(field, file_name, content_type, bytes))
    }
}

/// Multipart body: text fields then files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<Upload>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, upload: Upload) -> Self {
        self.files.push(upload);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn into_form(self) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for upload in self.files {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)?;
            form = form.part(upload.field, part);
        }
        Ok(form)
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

impl Payload {
    /// Serialize any record into a JSON body
    pub fn json<T: Serialize + ?Sized>(body: &T) -> ClientResult<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    /// Put `_method` into the body
    pub fn with_method_override(self, method: MethodOverride) -> ClientResult<Self> {
        let verb = Value::String(method.as_str().to_string());
        match self {
            Self::Empty => {
                let mut map = Map::new();
                map.insert(METHOD_FIELD.to_string(), verb);
                Ok(Self::Json(Value::Object(map)))
            }
            Self::Json(Value::Object(mut map)) => {
                map.insert(METHOD_FIELD.to_string(), verb);
                Ok(Self::Json(Value::Object(map)))
            }
            Self::Json(other) => Err(ClientError::InvalidResponse(format!(
                "cannot spoof a method on a non-object body: {other}"
            ))),
            Self::Multipart(mut body) => {
                body.fields.retain(|(k, _)| k != METHOD_FIELD);
                body.fields
                    .push((METHOD_FIELD.to_string(), method.as_str().to_string()));
                Ok(Self::Multipart(body))
            }
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spoof_json_object() {
        let payload = Payload::json(&json!({"name": "Summer"}))
            .unwrap()
            .with_method_override(MethodOverride::Put)
            .unwrap();
        assert_eq!(payload, Payload::Json(json!({"name": "Summer", "_method": "PUT"})));
    }

    #[test]
    fn test_spoof_empty_body() {
        let payload = Payload::Empty
            .with_method_override(MethodOverride::Delete)
            .unwrap();
        assert_eq!(payload, Payload::Json(json!({"_method": "DELETE"})));
    }

    #[test]
    fn test_spoof_multipart_replaces_existing() {
        let body = MultipartBody::new().text("name", "Ana").text("_method", "PATCH");
        let payload = Payload::Multipart(body)
            .with_method_override(MethodOverride::Put)
            .unwrap();
        let Payload::Multipart(body) = payload else {
            panic!("expected multipart");
        };
        assert_eq!(body.field("_method"), Some("PUT"));
        assert_eq!(body.fields.iter().filter(|(k, _)| k == "_method").count(), 1);
    }

    #[test]
    fn test_spoof_rejects_array_body() {
        let result = Payload::Json(json!([1, 2])).with_method_override(MethodOverride::Put);
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        let upload = Upload::from_path("image", &path).unwrap();
        assert_eq!(upload.file_name, "avatar.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.bytes.len(), 4);
    }
}
