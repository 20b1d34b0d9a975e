//! `/api/orders`

use serde::Serialize;
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::status::{OrderStatus, StatusLookup};

use super::Endpoint;
use crate::http::{decode_record, ApiRequest, HttpClient};
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/orders");

pub fn status_path(id: i64) -> String {
    format!("{}/status", ENDPOINT.item(id))
}

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Order>> {
    super::list(client, &ENDPOINT).await
}

/// Place a new order from the POS
pub async fn place<C: HttpClient + ?Sized>(client: &C, order: &OrderCreate) -> ClientResult<Order> {
    super::create(client, &ENDPOINT, Payload::json(order)?).await
}

/// Change status and/or the senior discount of an existing order
pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    changes: &OrderUpdate,
) -> ClientResult<Order> {
    super::update(client, &ENDPOINT, id, Payload::json(changes)?).await
}

/// `POST /api/orders/{id}/status` with `_method=PUT`
pub async fn update_status<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    status: OrderStatus,
) -> ClientResult<Order> {
    #[derive(Serialize)]
    struct StatusBody {
        status: &'static str,
    }

    let body = Payload::json(&StatusBody {
        status: status.as_wire(),
    })?;
    let value = client
        .execute(ApiRequest::update(status_path(id), body))
        .await?;
    decode_record(value)
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
