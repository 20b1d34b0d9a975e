//! Rooms
//!
//! Anyone signed in can list `/api/rooms`; writes go through the
//! `/api/superadmin/rooms` routes.

use shared::models::Room;

use super::Endpoint;
use crate::http::HttpClient;
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::with_item_prefix("/api/rooms", "/api/superadmin/rooms");

/// Admin collection path, used for create
pub const ADMIN_COLLECTION: &str = "/api/superadmin/rooms";

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Room>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<Room> {
    super::create(client, &Endpoint::new(ADMIN_COLLECTION), payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<Room> {
    super::update(client, &ENDPOINT, id, payload).await
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
