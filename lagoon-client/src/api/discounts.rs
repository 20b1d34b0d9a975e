//! `/api/discounts`

use shared::models::Discount;

use super::Endpoint;
use crate::http::HttpClient;
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/discounts");

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Discount>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<Discount> {
    super::create(client, &ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<Discount> {
    super::update(client, &ENDPOINT, id, payload).await
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
