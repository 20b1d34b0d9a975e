//! `/api/menu-items`

use shared::models::MenuItem;

use super::Endpoint;
use crate::http::HttpClient;
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/menu-items");

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<MenuItem>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<MenuItem> {
    super::create(client, &ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<MenuItem> {
    super::update(client, &ENDPOINT, id, payload).await
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
