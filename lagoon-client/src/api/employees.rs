//! `/api/employees`
//!
//! Create and update go out as multipart when a photo is attached.

use shared::models::Employee;

use super::Endpoint;
use crate::http::HttpClient;
use crate::payload::Payload;
use crate::ClientResult;

pub const ENDPOINT: Endpoint = Endpoint::new("/api/employees");

pub async fn list<C: HttpClient + ?Sized>(client: &C) -> ClientResult<Vec<Employee>> {
    super::list(client, &ENDPOINT).await
}

pub async fn create<C: HttpClient + ?Sized>(client: &C, payload: Payload) -> ClientResult<Employee> {
    super::create(client, &ENDPOINT, payload).await
}

pub async fn update<C: HttpClient + ?Sized>(
    client: &C,
    id: i64,
    payload: Payload,
) -> ClientResult<Employee> {
    super::update(client, &ENDPOINT, id, payload).await
}

pub async fn delete<C: HttpClient + ?Sized>(client: &C, id: i64) -> ClientResult<()> {
    super::delete(client, &ENDPOINT, id).await
}
