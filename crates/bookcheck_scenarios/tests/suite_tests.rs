//! End-to-end suite tests against a stateful double of the booking service.


use std::collections::BTreeMap;

use bookcheck_api::{BookingApiClient, BookingDates, BookingOps, BookingRequest};
use bookcheck_config::{ApiConfig, AppConfig, AuthConfig, VerifyConfig};
use bookcheck_scenarios::run_suite;
use bookcheck_verify::{verify_fields_eventually, VerifyPolicy};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(base_url: String) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url,
            request_timeout_secs: 5,
        },
        auth: AuthConfig {
            username: fixtures::ADMIN_USERNAME.to_string(),
            password: fixtures::ADMIN_PASSWORD.to_string(),
        },
        verify: VerifyConfig {
            max_attempts: 3,
            retry_delay_ms: 50,
            date_tolerance_hours: 24,
        },
    }
}

#[tokio::test]
async fn full_suite_passes_against_the_service_double() {
    let server = fixtures::start_mock_booking_service().await;
    let config = config_for(server.uri());

    let report = run_suite(&config).await;

    for result in report.results() {
        assert!(
            result.passed(),
            "scenario '{}' failed: {:?}",
            result.name,
            result.outcome
        );
    }
    assert_eq!(report.results().len(), 11);
    assert!(report.all_passed());
}

#[tokio::test]
async fn verification_rides_out_the_eventual_consistency_window() {
    // The double answers the pre-update state twice before the updated
    // state becomes visible; verification must succeed on the 3rd read.
    let server = MockServer::start().await;

    let booking = json!({
        "firstname": "James",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {"checkin": "2024-01-01", "checkout": "2024-01-05"},
        "additionalneeds": "Breakfast",
    });
    let mut updated = booking.clone();
    updated["bookingdates"]["checkin"] = json!("2024-02-01");

    Mock::given(method("POST"))
        .and(path("/booking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookingid": 1,
            "booking": booking,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/booking/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(booking.clone()))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/booking/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&server)
        .await;

    let client = BookingApiClient::new(&ApiConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
    })
    .unwrap();
    let mut ops = BookingOps::new(client);
    let dates = BookingDates::new(
        "2024-01-01".parse().unwrap(),
        "2024-01-05".parse().unwrap(),
    )
    .unwrap();
    ops.prepare_booking(BookingRequest::new("James", "Brown", 111, true, dates, None).unwrap());
    ops.create_booking().await.unwrap();

    let mut expected = BTreeMap::new();
    expected.insert("checkin".to_string(), "2024-02-01".to_string());
    let policy = VerifyPolicy {
        max_attempts: 3,
        retry_delay: std::time::Duration::from_millis(50),
        ..VerifyPolicy::default()
    };

    let attempts = verify_fields_eventually(&expected, || ops.fetch_current(), &policy)
        .await
        .unwrap();
    assert_eq!(attempts, 3);
}
