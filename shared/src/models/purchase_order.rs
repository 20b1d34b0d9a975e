//! Purchase Order Model

use serde::{Deserialize, Serialize};

use super::de::flexible_f64;

/// Which side of the business is buying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    Restaurant,
    Hotel,
}

/// One purchase order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderItem {
    pub name: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub price: f64,
}

impl PurchaseOrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Sum of `quantity × price` over all lines
pub fn items_total(items: &[PurchaseOrderItem]) -> f64 {
    items.iter().map(PurchaseOrderItem::line_total).sum()
}

/// Purchase order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_number: String,
    pub supplier: String,
    #[serde(default)]
    pub department: Department,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
    /// As echoed by the server
    #[serde(default, deserialize_with = "flexible_f64")]
    pub total_amount: f64,
    #[serde(default)]
    pub expected_delivery_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
