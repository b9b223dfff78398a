//! HTTP-level tests for the booking API client, driven against a wiremock
//! double of the booking service.

use std::collections::BTreeMap;

use bookcheck_api::{
    ApiError, AuthRequest, BookingApiClient, BookingDates, BookingFilter, BookingOps,
    BookingRequest,
};
use bookcheck_config::ApiConfig;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn client_for(server: &MockServer) -> BookingApiClient {
    BookingApiClient::new(&ApiConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
    })
    .unwrap()
}

fn james_brown() -> BookingRequest {
    let dates = BookingDates::new(date("2024-01-01"), date("2024-01-05")).unwrap();
    BookingRequest::new("James", "Brown", 111, true, dates, None).unwrap()
}

#[tokio::test]
async fn create_token_returns_generated_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(json!({"username": "admin", "password": "password123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AuthRequest::new("admin", "password123").unwrap();
    let token = client.create_token(&request).await.unwrap();
    assert_eq!(token, "abc123");
}

#[tokio::test]
async fn create_token_surfaces_rejection_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reason": "Bad credentials"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AuthRequest::new("invalid", "credentials").unwrap();
    let err = client.create_token(&request).await.unwrap_err();
    match err {
        ApiError::AuthRejected(reason) => assert_eq!(reason, "Bad credentials"),
        other => panic!("expected AuthRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn create_booking_extracts_assigned_id() {
    let server = MockServer::start().await;
    let booking = james_brown();
    Mock::given(method("POST"))
        .and(path("/booking"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::to_value(&booking).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookingid": 42,
            "booking": serde_json::to_value(&booking).unwrap(),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.create_booking(&booking).await.unwrap();
    assert_eq!(created.bookingid(), 42);
    assert_eq!(created.booking(), &booking);
}

#[tokio::test]
async fn create_booking_rejects_non_positive_id() {
    let server = MockServer::start().await;
    let booking = james_brown();
    Mock::given(method("POST"))
        .and(path("/booking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookingid": 0,
            "booking": serde_json::to_value(&booking).unwrap(),
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create_booking(&booking).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidBookingId(0)));
}

#[tokio::test]
async fn partial_update_nests_dates_and_sends_token_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/booking/7"))
        .and(header("cookie", "token=abc123"))
        .and(body_json(json!({"bookingdates": {"checkin": "2024-02-01"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "firstname": "James",
            "lastname": "Brown",
            "totalprice": 111,
            "depositpaid": true,
            "bookingdates": {"checkin": "2024-02-01", "checkout": "2024-01-05"},
            "additionalneeds": "Breakfast",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut fields = BTreeMap::new();
    fields.insert("checkin".to_string(), "2024-02-01".to_string());
    let response = client
        .partial_update_booking(7, &fields, "abc123")
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 200);
    assert!(response.body.is_some());
}

#[tokio::test]
async fn delete_booking_answers_created_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/booking/7"))
        .and(header("cookie", "token=abc123"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.delete_booking(7, "abc123").await.unwrap();
    assert_eq!(response.status.as_u16(), 201);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn listing_sends_name_filters_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/booking"))
        .and(query_param("firstname", "Sally"))
        .and(query_param("lastname", "Fields"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"bookingid": 1}, {"bookingid": 2}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = BookingFilter::by_name("Sally", "Fields");
    let ids = client.booking_ids(Some(&filter)).await.unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0].bookingid, 1);
}

#[tokio::test]
async fn listing_sends_date_filters_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/booking"))
        .and(query_param("checkin", "2024-01-01"))
        .and(query_param("checkout", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"bookingid": 9}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = BookingFilter::by_dates(date("2024-01-01"), date("2024-01-31"));
    let ids = client.booking_ids(Some(&filter)).await.unwrap();
    assert_eq!(ids, vec![bookcheck_api::BookingId { bookingid: 9 }]);
}

#[tokio::test]
async fn missing_booking_keeps_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/booking/404404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.get_booking(404404).await.unwrap();
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn facade_rejects_operations_before_required_state() {
    let server = MockServer::start().await;
    let mut ops = BookingOps::new(client_for(&server));

    assert!(matches!(
        ops.booking_id().unwrap_err(),
        ApiError::NoCurrentBooking
    ));
    assert!(matches!(
        ops.create_booking().await.unwrap_err(),
        ApiError::NoPreparedRequest
    ));
    assert!(matches!(
        ops.fetch_current().await.unwrap_err(),
        ApiError::NoCurrentBooking
    ));
}

#[tokio::test]
async fn fetch_current_treats_missing_booking_as_fatal() {
    let server = MockServer::start().await;
    let booking = james_brown();
    Mock::given(method("POST"))
        .and(path("/booking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookingid": 3,
            "booking": serde_json::to_value(&booking).unwrap(),
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/booking/3"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let mut ops = BookingOps::new(client_for(&server));
    ops.prepare_booking(booking);
    ops.create_booking().await.unwrap();

    let err = ops.fetch_current().await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 404, .. }));
}
