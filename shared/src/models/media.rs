//! Room amenities and images
//!
//! Older rows store these columns as JSON text, newer rows as arrays, and
//! some as PHP associative arrays (`{"wifi": true, "tv": false}`). Decoding
//! happens once, here, into a plain list; nothing downstream re-checks the
//! encoding.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical amenity list, in upstream order, without blanks or duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amenities(Vec<String>);

impl Amenities {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut out = Self::default();
        for item in items {
            out.push(item.into());
        }
        out
    }

    /// Decode any of the accepted encodings
    pub fn from_value(value: &Value) -> Self {
        let mut out = Self::default();
        collect_amenities(value, &mut out, true);
        out
    }

    fn push(&mut self, item: String) {
        let item = item.trim();
        if !item.is_empty() && !self.0.iter().any(|a| a.eq_ignore_ascii_case(item)) {
            self.0.push(item.to_string());
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, amenity: &str) -> bool {
        self.0.iter().any(|a| a.eq_ignore_ascii_case(amenity))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.trim().is_empty() && s != "0" && !s.eq_ignore_ascii_case("false"),
        Value::Null => false,
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn collect_amenities(value: &Value, out: &mut Amenities, allow_text: bool) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    Value::Object(obj) => {
                        if let Some(Value::String(name)) = obj.get("name") {
                            out.push(name.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            // {"0": "WiFi", "3": "TV"}: a PHP list with holes
            let mut indexed: Vec<(u64, &String)> = Vec::new();
            for (key, flag) in map {
                match (key.parse::<u64>(), flag) {
                    (Ok(idx), Value::String(name)) => indexed.push((idx, name)),
                    (Ok(_), _) => {}
                    (Err(_), flag) if is_truthy(flag) => out.push(key.clone()),
                    (Err(_), _) => {}
                }
            }
            indexed.sort_by_key(|(idx, _)| *idx);
            for (_, name) in indexed {
                out.push(name.clone());
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if allow_text && (trimmed.starts_with('[') || trimmed.starts_with('{')) {
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(inner) => collect_amenities(&inner, out, false),
                    Err(e) => {
                        tracing::debug!(error = %e, "amenities text is not JSON, splitting on commas");
                        split_list(trimmed, out);
                    }
                }
            } else {
                split_list(trimmed, out);
            }
        }
    }
}

fn split_list(text: &str, out: &mut Amenities) {
    let text = text.trim_matches(&['[', ']'][..]);
    for part in text.split(',') {
        out.push(part.trim_matches(|c: char| c == '"' || c.is_whitespace()).to_string());
    }
}

impl<'de> Deserialize<'de> for Amenities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Canonical list of image paths or URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomImages(Vec<String>);

impl RoomImages {
    pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut out = Self::default();
        for p in paths {
            out.push(p.into());
        }
        out
    }

    pub fn from_value(value: &Value) -> Self {
        let mut out = Self::default();
        collect_images(value, &mut out, true);
        out
    }

    fn push(&mut self, path: String) {
        let path = path.trim();
        if !path.is_empty() && !self.0.iter().any(|p| p == path) {
            self.0.push(path.to_string());
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cover image, if any
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

fn collect_images(value: &Value, out: &mut RoomImages, allow_text: bool) {
    match value {
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    Value::Object(obj) => {
                        let path = obj.get("url").or_else(|| obj.get("path"));
                        if let Some(Value::String(p)) = path {
                            out.push(p.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            for v in map.values() {
                if let Value::String(p) = v {
                    out.push(p.clone());
                }
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if allow_text && (trimmed.starts_with('[') || trimmed.starts_with('{')) {
                if let Ok(inner) = serde_json::from_str::<Value>(trimmed) {
                    collect_images(&inner, out, false);
                    return;
                }
            }
            out.push(trimmed.to_string());
        }
        _ => {}
    }
}

impl<'de> Deserialize<'de> for RoomImages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amenities_encodings_agree() {
        let expected = Amenities::new(["WiFi", "TV", "Mini Bar"]);

        let array = json!(["WiFi", "TV", "Mini Bar"]);
        let text = json!("[\"WiFi\",\"TV\",\"Mini Bar\"]");
        let object = json!({"WiFi": true, "TV": true, "Mini Bar": "yes", "Jacuzzi": false});
        let php_list = json!({"0": "WiFi", "1": "TV", "4": "Mini Bar"});
        let csv = json!("WiFi, TV, Mini Bar");

        for value in [array, text, php_list, csv] {
            assert_eq!(Amenities::from_value(&value), expected, "{value}");
        }

        // object keys carry no order
        let mut from_object = Amenities::from_value(&object).as_slice().to_vec();
        from_object.sort();
        let mut wanted = expected.as_slice().to_vec();
        wanted.sort();
        assert_eq!(from_object, wanted);
    }

    #[test]
    fn test_amenities_php_list_keeps_index_order() {
        let value = json!({"10": "Safe", "2": "Kettle"});
        assert_eq!(Amenities::from_value(&value).as_slice(), ["Kettle", "Safe"]);
    }

    #[test]
    fn test_amenities_nested_text_object() {
        let value = json!("{\"wifi\":1,\"aircon\":0}");
        assert_eq!(Amenities::from_value(&value), Amenities::new(["wifi"]));
    }

    #[test]
    fn test_amenities_tolerates_junk() {
        assert!(Amenities::from_value(&json!(null)).is_empty());
        assert!(Amenities::from_value(&json!(42)).is_empty());
        assert!(Amenities::from_value(&json!("")).is_empty());
        let amenities = Amenities::from_value(&json!([{"name": "Pool"}, 3, "pool"]));
        assert_eq!(amenities.as_slice(), ["Pool"]);
    }

    #[test]
    fn test_amenities_deserialize_field() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            amenities: Amenities,
        }
        let row: Row = serde_json::from_str(r#"{"amenities":"[\"Balcony\"]"}"#).unwrap();
        assert!(row.amenities.contains("balcony"));
        let row: Row = serde_json::from_str("{}").unwrap();
        assert!(row.amenities.is_empty());
    }

    #[test]
    fn test_images_encodings() {
        let expected = RoomImages::new(["rooms/101a.jpg", "rooms/101b.jpg"]);
        assert_eq!(
            RoomImages::from_value(&json!("[\"rooms/101a.jpg\",\"rooms/101b.jpg\"]")),
            expected
        );
        assert_eq!(
            RoomImages::from_value(&json!([{"url": "rooms/101a.jpg"}, {"path": "rooms/101b.jpg"}])),
            expected
        );
        assert_eq!(
            RoomImages::from_value(&json!("rooms/101a.jpg")).first(),
            Some("rooms/101a.jpg")
        );
    }
}
