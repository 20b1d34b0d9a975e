//! Input validation helpers
//!
//! Client-side checks run before any request is sent. They only catch the
//! obvious mistakes; the API re-validates everything and its answer wins.
//! Each helper records at most one message per field into [`FieldErrors`].

use chrono::NaiveDate;

use crate::error::FieldErrors;
use crate::util::parse_date;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: discount, room type, supplier, menu item, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions
pub const MAX_NOTE_LEN: usize = 1000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Minimum password length on the employee form
pub const MIN_PASSWORD_LEN: usize = 8;

/// Largest percentage a discount may take
pub const MAX_PERCENTAGE: f64 = 100.0;

// ── Primitive checks ────────────────────────────────────────────────

/// `x@y.z` with no whitespace. Deliberately loose.
pub fn is_email_shape(value: &str) -> bool {
    let value = value.trim();
    if value.len() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Parse user-typed numbers; blanks and garbage are `None`
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim().replace(',', "");
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ── Recording checks ────────────────────────────────────────────────

/// Non-empty after trimming. Returns whether the value was present.
pub fn require(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
        return false;
    }
    true
}

/// Present and no longer than `max_len` characters.
pub fn require_text(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    max_len: usize,
) -> bool {
    if !require(errors, field, label, value) {
        return false;
    }
    let len = value.trim().chars().count();
    if len > max_len {
        errors.add(field, format!("{label} is too long ({len} chars, max {max_len})"));
        return false;
    }
    true
}

/// Optional text within `max_len` characters.
pub fn optional_text(errors: &mut FieldErrors, field: &str, label: &str, value: &str, max_len: usize) {
    let len = value.trim().chars().count();
    if len > max_len {
        errors.add(field, format!("{label} is too long ({len} chars, max {max_len})"));
    }
}

/// Required email with the `x@y.z` shape.
pub fn require_email(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> bool {
    if !require(errors, field, label, value) {
        return false;
    }
    if !is_email_shape(value) {
        errors.add(field, "Enter a valid email address");
        return false;
    }
    true
}

/// Required numeric value. Returns the number when it parsed.
pub fn require_number(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> Option<f64> {
    if !require(errors, field, label, value) {
        return None;
    }
    let parsed = parse_number(value);
    if parsed.is_none() {
        errors.add(field, format!("{label} must be a number"));
    }
    parsed
}

/// Optional numeric value; blank is `Ok(None)`, garbage records an error.
pub fn optional_number(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    let parsed = parse_number(value);
    if parsed.is_none() {
        errors.add(field, format!("{label} must be a number"));
    }
    parsed
}

/// Strictly positive.
pub fn check_positive(errors: &mut FieldErrors, field: &str, label: &str, value: f64) -> bool {
    if value <= 0.0 {
        errors.add(field, format!("{label} must be greater than 0"));
        return false;
    }
    true
}

/// Zero or more.
pub fn check_non_negative(errors: &mut FieldErrors, field: &str, label: &str, value: f64) -> bool {
    if value < 0.0 {
        errors.add(field, format!("{label} cannot be negative"));
        return false;
    }
    true
}

/// Inclusive range check.
pub fn check_range(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
) -> bool {
    if value < min || value > max {
        errors.add(field, format!("{label} must be between {min} and {max}"));
        return false;
    }
    true
}

/// Required date in one of the formats [`parse_date`] reads.
pub fn require_date(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> Option<NaiveDate> {
    if !require(errors, field, label, value) {
        return None;
    }
    let parsed = parse_date(value);
    if parsed.is_none() {
        errors.add(field, format!("{label} is not a valid date"));
    }
    parsed
}

/// `end` strictly after `start`; the error lands on `end_field`.
pub fn check_date_order(
    errors: &mut FieldErrors,
    end_field: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    message: &str,
) -> bool {
    match (start, end) {
        (Some(s), Some(e)) if e <= s => {
            errors.add(end_field, message);
            false
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email_shape("ana@resort.ph"));
        assert!(is_email_shape("a.b+c@mail.example.com"));
        assert!(!is_email_shape("ana@resort"));
        assert!(!is_email_shape("@resort.ph"));
        assert!(!is_email_shape("ana@.ph"));
        assert!(!is_email_shape("ana@resort."));
        assert!(!is_email_shape("ana maria@resort.ph"));
        assert!(!is_email_shape("a@b@c.d"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1,500.50 "), Some(1500.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_require_keeps_first_error() {
        let mut errors = FieldErrors::new();
        assert!(require_number(&mut errors, "salary", "Salary", "  ").is_none());
        assert_eq!(errors.get("salary"), Some("Salary is required"));

        let mut errors = FieldErrors::new();
        assert!(require_number(&mut errors, "salary", "Salary", "lots").is_none());
        assert_eq!(errors.get("salary"), Some("Salary must be a number"));
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut errors = FieldErrors::new();
        assert!(check_range(&mut errors, "value", "Value", 1.0, 1.0, 100.0));
        assert!(check_range(&mut errors, "value", "Value", 100.0, 1.0, 100.0));
        assert!(errors.is_empty());
        assert!(!check_range(&mut errors, "value", "Value", 100.5, 1.0, 100.0));
        assert!(errors.contains("value"));
    }

    #[test]
    fn test_date_order() {
        let mut errors = FieldErrors::new();
        let start = parse_date("2024-06-10");
        assert!(!check_date_order(&mut errors, "end_date", start, start, "End date must be after start date"));
        assert!(errors.contains("end_date"));

        let mut errors = FieldErrors::new();
        let end = parse_date("2024-06-11");
        assert!(check_date_order(&mut errors, "end_date", start, end, "x"));
        assert!(check_date_order(&mut errors, "end_date", None, end, "x"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_require_text_length() {
        let mut errors = FieldErrors::new();
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(!require_text(&mut errors, "name", "Name", &long, MAX_NAME_LEN));
        assert!(errors.get("name").unwrap().starts_with("Name is too long"));
    }
}
