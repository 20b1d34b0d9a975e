//! `/api/events`

use shared::models::{Event, EventPaymentUpdate, EventStatusUpdate};

use super::Endpoint;
use crate::http::{decode_record, ApiRequest, HttpClient};
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/events");

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Event>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<Event> {
    super::create(client, &ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<Event> {
    super::update(client, &ENDPOINT, id, payload).await
}

/// `POST /api/events/{id}/payment` with `_method=PUT`
pub async fn update_payment<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    update: &EventPaymentUpdate,
) -> ClientResult<Event> {
    let path = format!("{}/payment", ENDPOINT.item(id));
    let value = client
        .execute(ApiRequest::update(path, Payload::json(update)?))
        .await?;
    decode_record(value)
}

/// `POST /api/events/{id}/status` with `_method=PUT`
pub async fn update_status<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    update: &EventStatusUpdate,
) -> ClientResult<Event> {
    let path = format!("{}/status", ENDPOINT.item(id));
    let value = client
        .execute(ApiRequest::update(path, Payload::json(update)?))
        .await?;
    decode_record(value)
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
