//! API response shapes
//!
//! The API answers with either a bare record or a `{ "data": ... }` wrapper,
//! depending on the controller. Validation failures come back as 422 with
//! `{ "message": ..., "errors": { field: [messages] } }`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bare record or `{ "data": record }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}

/// 422 body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Generic error body: `{ "message": ... }` or `{ "error": ... }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Plain acknowledgement (`{ "message": "Deleted" }` and the like)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let bare: Envelope<Item> = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(bare.into_inner(), Item { id: 4 });

        let wrapped: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"data": [{"id": 1}], "current_page": 1}"#).unwrap();
        assert_eq!(wrapped.into_inner(), vec![Item { id: 1 }]);

        let list: Envelope<Vec<Item>> = serde_json::from_str(r#"[{"id": 2}]"#).unwrap();
        assert_eq!(list.into_inner().len(), 1);
    }

    #[test]
    fn test_validation_body() {
        let body: ValidationErrorBody = serde_json::from_str(
            r#"{"message":"The given data was invalid.","errors":{"name":["required"]}}"#,
        )
        .unwrap();
        assert_eq!(body.errors["name"], vec!["required".to_string()]);
    }
}
