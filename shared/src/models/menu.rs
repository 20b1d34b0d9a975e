//! Menu Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_bool, flexible_f64};

fn default_available() -> bool {
    true
}

/// Restaurant menu item the POS sells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "flexible_f64")]
    pub price: f64,
    #[serde(default = "default_available", deserialize_with = "flexible_bool")]
    pub available: bool,
}
