//! Amount helpers
//!
//! Arithmetic stays in `f64`; rounding to two places happens only when an
//! amount is displayed.

/// Senior-citizen discount rule
///
/// The POS checkout and the order-update screen take different rates off a
/// senior citizen's bill. They are kept as two named rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeniorRule {
    /// Menu ordering / POS checkout: 20%
    PointOfSale,
    /// Adjusting an existing order: 10%
    OrderUpdate,
}

impl SeniorRule {
    pub const fn rate(&self) -> f64 {
        match self {
            Self::PointOfSale => 0.20,
            Self::OrderUpdate => 0.10,
        }
    }

    /// Discount on `subtotal`, zero unless the customer is a senior citizen
    pub fn discount(&self, subtotal: f64, is_senior_citizen: bool) -> f64 {
        if is_senior_citizen {
            subtotal * self.rate()
        } else {
            0.0
        }
    }
}

/// Round to two decimal places
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount with two decimals and thousands separators
///
/// # Examples
///
/// ```
/// use shared::money::format_amount;
///
/// assert_eq!(format_amount(250.0), "250.00");
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// assert_eq!(format_amount(-5.5), "-5.50");
/// ```
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && round2(amount) != 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

/// Format with the peso sign
///
/// ```
/// use shared::money::format_currency;
///
/// assert_eq!(format_currency(200.0), "₱200.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("₱{}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_rules_are_distinct() {
        assert_eq!(SeniorRule::PointOfSale.discount(250.0, true), 50.0);
        assert_eq!(SeniorRule::OrderUpdate.discount(250.0, true), 25.0);
        assert_eq!(SeniorRule::PointOfSale.discount(250.0, false), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}
