//! Lagoon Client - HTTP client for the resort API
//!
//! Provides the transport ([`HttpClient`], [`NetworkHttpClient`]), request
//! bodies with Laravel method spoofing, and typed endpoints per resource.

pub mod api;
pub mod config;
pub mod csrf;
pub mod error;
pub mod http;
pub mod payload;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{decode, decode_record, ApiRequest, HttpClient, NetworkHttpClient};
pub use payload::{MethodOverride, MultipartBody, Payload, Upload};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::FieldErrors;
