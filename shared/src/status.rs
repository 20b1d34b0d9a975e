//! Status vocabularies and their display lookup tables
//!
//! One enum per domain, one table per enum. Every page renders a status
//! through [`StatusLookup::info`] instead of keeping its own mapping.

use serde::{Deserialize, Serialize};

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// Label, tone and icon for one status value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

impl StatusInfo {
    const fn new(label: &'static str, tone: Tone, icon: &'static str) -> Self {
        Self { label, tone, icon }
    }
}

/// Fallback for values no table knows
pub const UNKNOWN_STATUS: StatusInfo = StatusInfo::new("Unknown", Tone::Neutral, "help-circle");

/// Shared behavior of the status enums
pub trait StatusLookup: Sized + Copy + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Wire string the API uses for this value
    fn as_wire(&self) -> &'static str;

    /// Display entry for this value
    fn info(&self) -> StatusInfo;

    /// Parse a wire string, case-insensitive
    fn from_wire(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_wire().eq_ignore_ascii_case(raw))
    }

    /// Display entry for a raw string, falling back to [`UNKNOWN_STATUS`]
    fn info_for(raw: &str) -> StatusInfo {
        Self::from_wire(raw).map_or(UNKNOWN_STATUS, |s| s.info())
    }
}

// ============================================================================
// Booking
// ============================================================================

/// Booking lifecycle
///
/// The API is not consistent about spelling (`confirm` vs `confirmed`,
/// `checkin` vs `checked-in`). Records keep the raw string; this enum is the
/// canonical reading of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl StatusLookup for BookingStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Confirmed,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Pending => StatusInfo::new("Pending", Tone::Warning, "clock"),
            Self::Confirmed => StatusInfo::new("Confirmed", Tone::Success, "check-circle"),
            Self::CheckedIn => StatusInfo::new("Checked In", Tone::Info, "log-in"),
            Self::CheckedOut => StatusInfo::new("Checked Out", Tone::Neutral, "log-out"),
            Self::Cancelled => StatusInfo::new("Cancelled", Tone::Danger, "x-circle"),
        }
    }

    fn from_wire(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "pending" => Some(Self::Pending),
            "confirm" | "confirmed" => Some(Self::Confirmed),
            "checkin" | "check_in" | "checked_in" => Some(Self::CheckedIn),
            "checkout" | "check_out" | "checked_out" => Some(Self::CheckedOut),
            "cancel" | "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

// ============================================================================
// Payment (orders, bookings)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl StatusLookup for PaymentStatus {
    const ALL: &'static [Self] = &[
        Self::Unpaid,
        Self::Partial,
        Self::Paid,
        Self::Refunded,
        Self::Unknown,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Unpaid => StatusInfo::new("Unpaid", Tone::Danger, "alert-circle"),
            Self::Partial => StatusInfo::new("Partially Paid", Tone::Warning, "pie-chart"),
            Self::Paid => StatusInfo::new("Paid", Tone::Success, "check-circle"),
            Self::Refunded => StatusInfo::new("Refunded", Tone::Info, "rotate-ccw"),
            Self::Unknown => UNKNOWN_STATUS,
        }
    }

    fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unpaid" | "pending" => Some(Self::Unpaid),
            "partial" | "partially_paid" => Some(Self::Partial),
            "paid" | "completed" => Some(Self::Paid),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }
}

// ============================================================================
// Restaurant order
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Statuses the order page may move to from this one
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        match self {
            Self::Pending => &[Self::Processing, Self::Cancelled],
            Self::Processing => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }
}

impl StatusLookup for OrderStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Processing,
        Self::Completed,
        Self::Cancelled,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Pending => StatusInfo::new("Pending", Tone::Warning, "clock"),
            Self::Processing => StatusInfo::new("Processing", Tone::Info, "loader"),
            Self::Completed => StatusInfo::new("Completed", Tone::Success, "check-circle"),
            Self::Cancelled => StatusInfo::new("Cancelled", Tone::Danger, "x-circle"),
        }
    }
}

// ============================================================================
// Room
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl StatusLookup for RoomStatus {
    const ALL: &'static [Self] = &[
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Reserved,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Available => StatusInfo::new("Available", Tone::Success, "door-open"),
            Self::Occupied => StatusInfo::new("Occupied", Tone::Danger, "bed"),
            Self::Maintenance => StatusInfo::new("Maintenance", Tone::Warning, "wrench"),
            Self::Reserved => StatusInfo::new("Reserved", Tone::Info, "bookmark"),
        }
    }
}

// ============================================================================
// Attendance
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
}

impl StatusLookup for AttendanceStatus {
    const ALL: &'static [Self] = &[Self::Present, Self::Absent, Self::Late];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Present => StatusInfo::new("Present", Tone::Success, "user-check"),
            Self::Absent => StatusInfo::new("Absent", Tone::Danger, "user-x"),
            Self::Late => StatusInfo::new("Late", Tone::Warning, "alarm-clock"),
        }
    }
}

// ============================================================================
// Event
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl StatusLookup for EventStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Confirmed, Self::Cancelled];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Pending => StatusInfo::new("Pending", Tone::Warning, "clock"),
            Self::Confirmed => StatusInfo::new("Confirmed", Tone::Success, "calendar-check"),
            Self::Cancelled => StatusInfo::new("Cancelled", Tone::Danger, "calendar-x"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventPaymentStatus {
    #[default]
    Unpaid,
    DepositPaid,
    FullyPaid,
}

impl StatusLookup for EventPaymentStatus {
    const ALL: &'static [Self] = &[Self::Unpaid, Self::DepositPaid, Self::FullyPaid];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::DepositPaid => "deposit_paid",
            Self::FullyPaid => "fully_paid",
        }
    }

    fn info(&self) -> StatusInfo {
        match self {
            Self::Unpaid => StatusInfo::new("Unpaid", Tone::Danger, "alert-circle"),
            Self::DepositPaid => StatusInfo::new("Deposit Paid", Tone::Warning, "credit-card"),
            Self::FullyPaid => StatusInfo::new("Fully Paid", Tone::Success, "check-circle"),
        }
    }
}
