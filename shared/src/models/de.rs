//! Lenient field decoders
//!
//! The API serializes decimal columns as strings ("1500.00") on some
//! endpoints and as numbers on others.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn number_from_value<E: de::Error>(value: Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom("number out of range")),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected a number, got {s:?}"))),
        other => Err(E::custom(format!("expected a number, got {other}"))),
    }
}

/// Number or numeric string; null and "" decode as 0
pub fn flexible_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value::<D::Error>(value)?.unwrap_or(0.0))
}

/// Number or numeric string; null and "" decode as `None`
pub fn flexible_opt_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    number_from_value::<D::Error>(value)
}

/// Non-negative integer or numeric string; null and "" decode as 0
pub fn flexible_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let n = number_from_value::<D::Error>(value)?.unwrap_or(0.0);
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("expected a whole count, got {n}")));
    }
    Ok(n as u32)
}

/// Boolean, 0/1, or "true"/"false"/"1"/"0"
pub fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "" | "0" | "false" | "no" => Ok(false),
            other => Err(de::Error::custom(format!("expected a boolean, got {other:?}"))),
        },
        other => Err(de::Error::custom(format!("expected a boolean, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "flexible_f64")]
        price: f64,
        #[serde(default, deserialize_with = "flexible_opt_f64")]
        deposit: Option<f64>,
        #[serde(deserialize_with = "flexible_u32")]
        guests: u32,
        #[serde(default, deserialize_with = "flexible_bool")]
        senior: bool,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let row: Row =
            serde_json::from_str(r#"{"price":"1500.50","deposit":200,"guests":"4","senior":1}"#)
                .unwrap();
        assert_eq!(row.price, 1500.5);
        assert_eq!(row.deposit, Some(200.0));
        assert_eq!(row.guests, 4);
        assert!(row.senior);
    }

    #[test]
    fn test_empty_and_missing() {
        let row: Row = serde_json::from_str(r#"{"price":null,"deposit":"","guests":2}"#).unwrap();
        assert_eq!(row.price, 0.0);
        assert_eq!(row.deposit, None);
        assert!(!row.senior);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"price":"abc","guests":1}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"price":1,"guests":-2}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"price":1,"guests":1.5}"#).is_err());
    }
}
