//! Restaurant Order Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_bool, flexible_f64, flexible_u32};
use crate::status::{OrderStatus, PaymentStatus};

/// Ordered line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub name: String,
    #[serde(deserialize_with = "flexible_u32")]
    pub quantity: u32,
    #[serde(deserialize_with = "flexible_f64")]
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub discount: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_senior_citizen: bool,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub is_senior_citizen: bool,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

/// Status / discount update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_senior_citizen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}
