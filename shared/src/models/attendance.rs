//! Attendance Model

use serde::{Deserialize, Serialize};

use crate::status::AttendanceStatus;

/// One employee's attendance for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: String,
    #[serde(default)]
    pub time_in: Option<String>,
    #[serde(default)]
    pub time_out: Option<String>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Planned shift from `/api/attendance/schedules`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub day: String,
    pub shift_start: String,
    pub shift_end: String,
}
