//! Unified error system for the Lagoon desk
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: A code plus a message for desk-side rule failures
//! - [`FieldErrors`]: The per-field message map every form renders
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, FieldErrors};
//!
//! let err = AppError::new(ErrorCode::OrderEmpty);
//! assert_eq!(err.code, ErrorCode::OrderEmpty);
//!
//! let mut fields = FieldErrors::new();
//! fields.add("email", "Enter a valid email address");
//! fields.add("email", "Email is required");
//! assert_eq!(fields.get("email"), Some("Enter a valid email address"));
//! ```

mod codes;
mod fields;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use fields::FieldErrors;
pub use types::AppError;
