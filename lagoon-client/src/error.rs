//! Client error types

use shared::error::{ErrorCode, FieldErrors};
use std::collections::HashMap;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server rejected the input (422 with an `errors` object)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// CSRF token missing or expired (419)
    #[error("CSRF token mismatch")]
    CsrfMismatch,

    /// Non-2xx response with a readable message
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file could not be read for upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Per-field messages when the server rejected the input
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::Validation { errors, .. } if !errors.is_empty() => {
                Some(FieldErrors::from_server(errors))
            }
            _ => None,
        }
    }

    /// Most specific [`ErrorCode`] for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Timeout(_) => ErrorCode::TimeoutError,
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::Unauthorized => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::CsrfMismatch => ErrorCode::CsrfMismatch,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Io(_) => ErrorCode::StorageError,
            Self::Api { .. }
            | Self::InvalidResponse(_)
            | Self::Serialization(_)
            | Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_only_for_validation() {
        let mut errors = HashMap::new();
        errors.insert("name".to_string(), vec!["required".to_string()]);
        let err = ClientError::Validation {
            message: "The given data was invalid.".into(),
            errors,
        };
        assert_eq!(err.field_errors().unwrap().get("name"), Some("required"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);

        let err = ClientError::Validation {
            message: "Invalid".into(),
            errors: HashMap::new(),
        };
        assert!(err.field_errors().is_none());
        assert!(ClientError::Unauthorized.field_errors().is_none());
    }
}
