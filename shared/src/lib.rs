//! Shared types for the Lagoon resort desk
//!
//! Record shapes, status vocabularies, field errors, validation helpers and
//! amount arithmetic used by both the HTTP client and the desk layer.

pub mod error;
pub mod models;
pub mod money;
pub mod response;
pub mod status;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{AppError, ErrorCode, FieldErrors};
pub use response::Envelope;
pub use serde::{Deserialize, Serialize};
pub use status::{StatusInfo, StatusLookup, Tone};
