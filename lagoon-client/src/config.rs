//! Client configuration

/// Client configuration for connecting to the resort API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// CSRF token sent as `X-CSRF-TOKEN` on mutating requests
    pub csrf_token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Append `_t=<millis>` to list requests so no cache answers them
    pub cache_bust: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            csrf_token: None,
            timeout: 30,
            cache_bust: true,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the CSRF token
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Turn list cache-busting on or off
    pub fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://resort.local")
            .with_token("abc")
            .with_csrf_token("xyz")
            .with_timeout(5)
            .with_cache_bust(false);
        assert_eq!(config.base_url, "http://resort.local");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.csrf_token.as_deref(), Some("xyz"));
        assert_eq!(config.timeout, 5);
        assert!(!config.cache_bust);
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.cache_bust);
        assert!(config.token.is_none());
    }
}
