//! Booking Model

use serde::{Deserialize, Serialize};

use super::de::{flexible_f64, flexible_u32};
use crate::status::{BookingStatus, PaymentStatus, StatusLookup};

/// Room booking
///
/// `status` and `payment_status` keep the API's exact strings so that a
/// record sent back is byte-for-byte what was received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "flexible_u32")]
    pub guests: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub total_amount: f64,
}

impl Booking {
    pub fn canonical_status(&self) -> Option<BookingStatus> {
        BookingStatus::from_wire(&self.status)
    }

    pub fn canonical_payment_status(&self) -> Option<PaymentStatus> {
        self.payment_status.as_deref().and_then(PaymentStatus::from_wire)
    }
}

/// Status update payload; `status` is sent exactly as given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kept_raw() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":5,"roomNumber":"204","checkIn":"2024-03-01","checkOut":"2024-03-03",
                "guests":2,"status":"confirm","paymentStatus":"pending","totalAmount":"7000"}"#,
        )
        .unwrap();
        assert_eq!(booking.status, "confirm");
        assert_eq!(booking.canonical_status(), Some(BookingStatus::Confirmed));
        assert_eq!(booking.canonical_payment_status(), Some(PaymentStatus::Unpaid));
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["status"], "confirm");
    }
}
