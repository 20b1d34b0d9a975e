//! Room Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_f64, flexible_u32};
use super::media::{Amenities, RoomImages};
use crate::status::RoomStatus;

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "flexible_u32")]
    pub capacity: u32,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub images: RoomImages,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: RoomStatus,
}
