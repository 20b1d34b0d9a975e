//! Employee Model

use serde::{Deserialize, Serialize};

use super::de::flexible_f64;

/// Employee record (never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phonenumber: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub salary: f64,
    #[serde(default)]
    pub address: String,
    /// Stored photo path
    #[serde(default)]
    pub image: Option<String>,
}
