//! Desk error type

use lagoon_client::ClientError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Rule the desk enforces before calling the API
    #[error("{0}")]
    App(#[from] AppError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeskError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Client(e) => e.code(),
            Self::App(e) => e.code,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Io(_) | Self::Json(_) => ErrorCode::StorageError,
        }
    }

    /// Shorthand for a coded rule violation
    pub fn rule(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::App(AppError::with_message(code, message))
    }
}

impl From<ErrorCode> for DeskError {
    fn from(code: ErrorCode) -> Self {
        Self::App(AppError::new(code))
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
