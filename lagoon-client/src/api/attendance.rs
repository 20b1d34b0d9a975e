//! `/api/attendance`

use shared::models::{AttendanceRecord, ScheduleEntry};

use super::Endpoint;
use crate::http::{decode, ApiRequest, HttpClient};
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/attendance");

pub const SCHEDULES_PATH: &str = "/api/attendance/schedules";

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<AttendanceRecord>> {
    super::list(client, &ENDPOINT).await
}

/// Planned shifts, used to flag late arrivals
pub async fn schedules<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<ScheduleEntry>> {
    let value = client.execute(ApiRequest::list(SCHEDULES_PATH)).await?;
    decode(value)
}

pub async fn create<C: HttpClient + ?Sized>(
    client: &C,
    payload: Payload,
) -> ClientResult<AttendanceRecord> {
    super::create(client, &ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<AttendanceRecord> {
    super::update(client, &ENDPOINT, id, payload).await
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
