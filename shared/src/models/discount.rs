//! Discount Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_f64, flexible_opt_f64};

/// How the discount value is read
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `value` is a percentage, 1–100
    #[default]
    Percentage,
    /// `value` is an amount off
    Fixed,
}

impl DiscountType {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" => Some(Self::Percentage),
            "fixed" | "fixed_amount" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// What the discount can be applied to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicableTo {
    #[default]
    All,
    Room,
    Food,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountStatus {
    #[default]
    Active,
    Inactive,
}

/// Discount entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub discount_type: DiscountType,
    #[serde(deserialize_with = "flexible_f64")]
    pub value: f64,
    #[serde(default, deserialize_with = "flexible_opt_f64")]
    pub min_purchase: Option<f64>,
    #[serde(default, deserialize_with = "flexible_opt_f64")]
    pub max_discount: Option<f64>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub applicable_to: ApplicableTo,
    #[serde(default)]
    pub status: DiscountStatus,
}

impl Discount {
    /// Amount taken off `purchase`
    ///
    /// Zero below `min_purchase` or when inactive. Percentage discounts are
    /// capped by `max_discount`; fixed discounts never exceed the purchase.
    pub fn amount_for(&self, purchase: f64) -> f64 {
        if self.status == DiscountStatus::Inactive || purchase <= 0.0 {
            return 0.0;
        }
        if self.min_purchase.is_some_and(|min| purchase < min) {
            return 0.0;
        }
        let raw = match self.discount_type {
            DiscountType::Percentage => purchase * self.value / 100.0,
            DiscountType::Fixed => self.value,
        };
        let capped = match self.max_discount {
            Some(max) if max > 0.0 => raw.min(max),
            _ => raw,
        };
        capped.clamp(0.0, purchase)
    }
}
