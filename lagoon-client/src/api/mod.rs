//! Typed endpoints, one module per resource
//!
//! The generic functions here cover the CRUD shape every resource shares.
//! Resource modules pin the record type and add their own extra calls.

use serde::de::DeserializeOwned;

use crate::http::{decode, decode_record, ApiRequest, HttpClient};
use crate::payload::Payload;
use crate::ClientResult;

pub mod attendance;
pub mod bookings;
pub mod discounts;
pub mod employees;
pub mod events;
pub mod menu;
pub mod orders;
pub mod purchase_orders;
pub mod rooms;

/// Where a resource lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Collection path, used for list and create
    pub collection: &'static str,
    /// Prefix for `/{id}` paths, used for update and delete
    pub item_prefix: &'static str,
}

impl Endpoint {
    pub const fn new(collection: &'static str) -> Self {
        Self {
            collection,
            item_prefix: collection,
        }
    }

    /// Resource whose item routes live elsewhere (admin prefixes)
    pub const fn with_item_prefix(collection: &'static str, item_prefix: &'static str) -> Self {
        Self {
            collection,
            item_prefix,
        }
    }

    pub fn item(&self, id: i64) -> String {
        format!("{}/{}", self.item_prefix, id)
    }
}

/// GET the collection, cache-busted
pub async fn list<T, C>(client: &C, endpoint: &Endpoint) -> ClientResult<Vec<T>>
where
    T: DeserializeOwned,
    C: HttpClient + ?Sized,
{
    let value = client.execute(ApiRequest::list(endpoint.collection)).await?;
    decode(value)
}

/// POST a new record; the server's copy comes back
pub async fn create<T, C>(client: &C, endpoint: &Endpoint, payload: Payload) -> ClientResult<T>
where
    T: DeserializeOwned,
    C: HttpClient + ?Sized,
{
    let value = client
        .execute(ApiRequest::post(endpoint.collection, payload))
        .await?;
    decode_record(value)
}

/// POST with `_method=PUT` to the item path
pub async fn update<T, C>(
    client: &C,
    endpoint: &Endpoint,
    id: i64,
    payload: Payload,
) -> ClientResult<T>
where
    T: DeserializeOwned,
    C: HttpClient + ?Sized,
{
    let value = client
        .execute(ApiRequest::update(endpoint.item(id), payload))
        .await?;
    decode_record(value)
}

/// POST with `_method=DELETE` to the item path
pub async fn delete<C>(client: &C, endpoint: &Endpoint, id: i64) -> ClientResult<()>
where
    C: HttpClient + ?Sized,
{
    client.execute(ApiRequest::delete(endpoint.item(id))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths() {
        let plain = Endpoint::new("/api/discounts");
        assert_eq!(plain.item(4), "/api/discounts/4");
        let admin = Endpoint::with_item_prefix("/api/rooms", "/api/superadmin/rooms");
        assert_eq!(admin.item(12), "/api/superadmin/rooms/12");
        assert_eq!(admin.collection, "/api/rooms");
    }
}
