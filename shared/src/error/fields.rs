//! Per-field error map shared by local validation and server rejections

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field name → message, one message per field.
///
/// Local rules and server-side `{ errors: { field: [messages] } }` responses
/// land in the same map so a form renders both the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one.
    ///
    /// The first failing rule for a field is the one the user sees.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record a message, replacing whatever the field had.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop the message for a field; returns whether one existed.
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another map in, overwriting fields both maps name.
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// Merge a server `errors` object verbatim.
    ///
    /// The server is authoritative, so its first message replaces any local
    /// message for the same field. Fields with an empty list are skipped.
    pub fn merge_server(&mut self, server: &HashMap<String, Vec<String>>) {
        for (field, messages) in server {
            if let Some(first) = messages.first() {
                self.0.insert(field.clone(), first.clone());
            }
        }
    }

    /// Build from a server `errors` object.
    pub fn from_server(server: &HashMap<String, Vec<String>>) -> Self {
        let mut errors = Self::new();
        errors.merge_server(server);
        errors
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (k, v) in iter {
            errors.add(k, v);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("value", "Value is required");
        errors.add("value", "Value must be between 1 and 100");
        assert_eq!(errors.get("value"), Some("Value is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_merge_server_overrides_local() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        errors.add("code", "Code is required");

        let mut server = HashMap::new();
        server.insert("name".to_string(), vec!["required".to_string(), "too short".to_string()]);
        server.insert("email".to_string(), vec![]);
        errors.merge_server(&server);

        assert_eq!(errors.get("name"), Some("required"));
        assert_eq!(errors.get("code"), Some("Code is required"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_clear_field() {
        let mut errors: FieldErrors = [("a", "x"), ("b", "y")].into_iter().collect();
        assert!(errors.clear_field("a"));
        assert!(!errors.clear_field("a"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let errors: FieldErrors = [("end_date", "End date must be after start date")]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["end_date"], "End date must be after start date");
    }
}
