//! Bookings
//!
//! Staff manage `/api/bookings`; guests book through
//! `/api/client/bookings`.

use shared::models::{Booking, BookingStatusUpdate};

use super::Endpoint;
use crate::http::{decode_record, ApiRequest, HttpClient};
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/bookings");

pub const CLIENT_ENDPOINT: Endpoint = Endpoint::new("/api/client/bookings");

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Booking>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<Booking> {
    super::create(client, &ENDPOINT, payload).await
}

/// Guest-facing booking form
pub async fn create_client_booking<C: HttpClient + ?Sized>(
    client: &C,
    payload: Payload,
) -> ClientResult<Booking> {
    super::create(client, &CLIENT_ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<Booking> {
    super::update(client, &ENDPOINT, id, payload).await
}

/// `POST /api/bookings/{id}/status` with `_method=PUT`; the status string
/// is sent as given
pub async fn update_status<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    status: impl Into<String>,
) -> ClientResult<Booking> {
    let body = BookingStatusUpdate {
        status: status.into(),
    };
    let path = format!("{}/status", ENDPOINT.item(id));
    let value = client
        .execute(ApiRequest::update(path, Payload::json(&body)?))
        .await?;
    decode_record(value)
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
