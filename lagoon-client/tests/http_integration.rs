// lagoon-client/tests/http_integration.rs
// Wire-level tests against a mock API

use lagoon_client::api;
use lagoon_client::{ClientConfig, ClientError, MultipartBody, NetworkHttpClient, Payload, Upload};
use serde_json::json;
use shared::status::OrderStatus;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NetworkHttpClient {
    ClientConfig::new(server.uri())
        .with_token("secret")
        .with_csrf_token("csrf-abc")
        .build_http_client()
        .unwrap()
}

#[tokio::test]
async fn test_list_is_cache_busted_and_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/discounts"))
        .and(header("Authorization", "Bearer secret"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1, "name": "Summer", "type": "percentage", "value": "15",
                "applicable_to": "all", "status": "active",
                "start_date": "2024-06-01", "end_date": "2024-08-31"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = api::discounts::list(&client).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Summer");

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.starts_with("_t="), "query was {query}");
}

#[tokio::test]
async fn test_cache_bust_can_be_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ClientConfig::new(server.uri())
        .with_cache_bust(false)
        .build_http_client()
        .unwrap();
    let rows = api::menu::list(&client).await.unwrap();
    assert!(rows.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_update_is_spoofed_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders/7/status"))
        .and(header("X-CSRF-TOKEN", "csrf-abc"))
        .and(body_partial_json(json!({"_method": "PUT", "status": "processing"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Status updated",
            "order": {"id": 7, "items": [], "status": "processing"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = api::orders::update_status(&client, 7, OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(order.id, 7);
    assert_eq!(order.status, OrderStatus::Processing);
}

#[tokio::test]
async fn test_delete_is_spoofed_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees/3"))
        .and(body_partial_json(json!({"_method": "DELETE"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    api::employees::delete(&client, 3).await.unwrap();
}

#[tokio::test]
async fn test_room_update_uses_admin_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/superadmin/rooms/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "roomNumber": "305", "roomType": "Deluxe", "price": "4500.00",
            "status": "available", "amenities": "[\"WiFi\",\"TV\"]"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let room = api::rooms::update(&client, 12, Payload::Json(json!({"price": 4500})))
        .await
        .unwrap();
    assert_eq!(room.room_number, "305");
    assert!(room.amenities.contains("tv"));
}

#[tokio::test]
async fn test_multipart_carries_method_field_and_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "name": "Ana Cruz", "email": "ana@resort.ph",
            "position": "Front Desk", "department": "Hotel", "salary": "25000"
        })))
        .mount(&server)
        .await;

    let body = MultipartBody::new()
        .text("name", "Ana Cruz")
        .file(Upload::new("photo", "ana.jpg", "image/jpeg", b"jpegbytes".to_vec()));
    let client = client_for(&server);
    let employee = api::employees::update(&client, 5, Payload::Multipart(body))
        .await
        .unwrap();
    assert_eq!(employee.id, 5);

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    let raw = String::from_utf8_lossy(&request.body);
    assert!(raw.contains("name=\"_method\""));
    assert!(raw.contains("PUT"));
    assert!(raw.contains("filename=\"ana.jpg\""));
    assert!(raw.contains("jpegbytes"));
}

#[tokio::test]
async fn test_422_becomes_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/discounts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The name has already been taken.",
            "errors": {
                "name": ["The name has already been taken.", "Second message"],
                "value": ["The value must be at least 1."]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::discounts::create(&client, Payload::Json(json!({"name": "Summer"})))
        .await
        .unwrap_err();
    let fields = err.field_errors().expect("field errors");
    assert_eq!(fields.get("name"), Some("The name has already been taken."));
    assert_eq!(fields.get("value"), Some("The value must be at least 1."));
    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn test_server_errors_map_to_variants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Server Error"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/client/bookings"))
        .respond_with(ResponseTemplate::new(419).set_body_string("Page Expired"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        api::events::list(&client).await,
        Err(ClientError::Unauthorized)
    ));
    assert!(matches!(
        api::bookings::list(&client).await,
        Err(ClientError::Api { status: 500, .. })
    ));
    assert!(matches!(
        api::bookings::create_client_booking(&client, Payload::Json(json!({}))).await,
        Err(ClientError::CsrfMismatch)
    ));
}

#[tokio::test]
async fn test_refresh_csrf_reads_meta_tag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/client/booking"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><meta name="csrf-token" content="fresh-token"></head></html>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/client/bookings"))
        .and(header("X-CSRF-TOKEN", "fresh-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 44, "status": "pending", "guests": 2, "totalAmount": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = ClientConfig::new(server.uri()).build_http_client().unwrap();
    let token = client.refresh_csrf("/client/booking").await.unwrap();
    assert_eq!(token, "fresh-token");

    let booking = api::bookings::create_client_booking(&client, Payload::Json(json!({"guests": 2})))
        .await
        .unwrap();
    assert_eq!(booking.id, 44);
    assert_eq!(booking.status, "pending");
}

#[tokio::test]
async fn test_schedules_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/attendance/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"employeeId": 2, "day": "Monday", "shiftStart": "08:00", "shiftEnd": "17:00"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let schedules = api::attendance::schedules(&client).await.unwrap();
    assert_eq!(schedules[0].employee_id, 2);
}

#[tokio::test]
async fn test_booking_status_is_sent_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bookings/12/status"))
        .and(body_partial_json(json!({"_method": "PUT", "status": "checked-in"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 12, "status": "checked-in", "totalAmount": 7000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let booking = api::bookings::update_status(&client, 12, "checked-in")
        .await
        .unwrap();
    assert_eq!(booking.status, "checked-in");
}
