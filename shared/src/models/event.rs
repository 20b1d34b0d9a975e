//! Event Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_f64, flexible_opt_f64, flexible_u32};
use crate::status::{EventPaymentStatus, EventStatus};

/// Function / venue booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub event_type: String,
    pub client_name: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: String,
    #[serde(default, deserialize_with = "flexible_u32")]
    pub guest_count: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub payment_status: EventPaymentStatus,
    #[serde(default, deserialize_with = "flexible_opt_f64")]
    pub deposit_amount: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub total_amount: f64,
}

impl Event {
    /// What is still owed
    pub fn balance(&self) -> f64 {
        match self.payment_status {
            EventPaymentStatus::FullyPaid => 0.0,
            EventPaymentStatus::DepositPaid => {
                (self.total_amount - self.deposit_amount.unwrap_or(0.0)).max(0.0)
            }
            EventPaymentStatus::Unpaid => self.total_amount,
        }
    }
}

/// Payment update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPaymentUpdate {
    pub payment_status: EventPaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<f64>,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventStatusUpdate {
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance() {
        let mut event: Event = serde_json::from_str(
            r#"{"id":1,"eventType":"Wedding","clientName":"Cruz","date":"2024-12-12",
                "venue":"Garden","guestCount":"120","paymentStatus":"deposit_paid",
                "depositAmount":"20000","totalAmount":"85000"}"#,
        )
        .unwrap();
        assert_eq!(event.guest_count, 120);
        assert_eq!(event.balance(), 65000.0);
        event.payment_status = EventPaymentStatus::FullyPaid;
        assert_eq!(event.balance(), 0.0);
    }
}
