//! Application error type

use super::codes::ErrorCode;
use thiserror::Error;

/// A rule the desk enforces before anything reaches the API: empty cart,
/// illegal status change, deposit above the total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::OrderEmpty);
        assert_eq!(err.message, "Order has no items");
        assert_eq!(err.to_string(), "Order has no items");
    }

    #[test]
    fn test_custom_message_wins() {
        let err = AppError::with_message(ErrorCode::PaymentDepositExceedsTotal, "Deposit cannot exceed the total amount");
        assert_eq!(err.code, ErrorCode::PaymentDepositExceedsTotal);
        assert_eq!(err.to_string(), "Deposit cannot exceed the total amount");
        assert_eq!(AppError::from(ErrorCode::OrderEmpty), AppError::new(ErrorCode::OrderEmpty));
    }
}
