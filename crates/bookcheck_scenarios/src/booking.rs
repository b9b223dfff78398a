// --- File: crates/bookcheck_scenarios/src/booking.rs ---
//! Booking CRUD scenarios.
//!
//! Each scenario builds its own facade and context, walks its steps in
//! order and surfaces the first failure. Mutation scenarios verify their
//! effect through the bounded-retry engine, since the service is allowed
//! a short window of read lag after a write.

use std::collections::BTreeMap;

use bookcheck_api::{BookingApiClient, BookingDates, BookingFilter, BookingOps, BookingRequest};
use bookcheck_common::{assertion_error, state_error, BookcheckError};
use bookcheck_config::AppConfig;
use bookcheck_verify::fields::{lookup, match_fields, value_as_string};
use bookcheck_verify::outcome::{join_mismatches, AttemptOutcome};
use bookcheck_verify::{
    parse_wire_date, verify_complete_booking_eventually, verify_fields_eventually, VerifyPolicy,
};
use chrono::NaiveDate;
use http::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::auth::generate_valid_token;
use crate::context::ScenarioContext;

fn harness(config: &AppConfig) -> Result<BookingOps, BookcheckError> {
    Ok(BookingOps::new(BookingApiClient::new(&config.api)?))
}

fn policy(config: &AppConfig) -> VerifyPolicy {
    VerifyPolicy::from_config(&config.verify)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("scenario fixture date is valid")
}

fn booking_request(
    firstname: &str,
    lastname: &str,
    checkin: NaiveDate,
    checkout: NaiveDate,
    totalprice: i64,
    depositpaid: bool,
    additionalneeds: Option<&str>,
) -> Result<BookingRequest, BookcheckError> {
    let dates = BookingDates::new(checkin, checkout)?;
    Ok(BookingRequest::new(
        firstname,
        lastname,
        totalprice,
        depositpaid,
        dates,
        additionalneeds.map(str::to_string),
    )?)
}

/// The expectation map a full-update verification checks: every structural
/// field in its string form, dates under their plain field names (the
/// engine applies the nested-path rule).
fn expected_fields_for(request: &BookingRequest) -> BTreeMap<String, String> {
    let mut expected = BTreeMap::new();
    expected.insert("firstname".to_string(), request.firstname().to_string());
    expected.insert("lastname".to_string(), request.lastname().to_string());
    expected.insert("totalprice".to_string(), request.totalprice().to_string());
    expected.insert(
        "depositpaid".to_string(),
        request.depositpaid().to_string(),
    );
    expected.insert(
        "additionalneeds".to_string(),
        request.additionalneeds().to_string(),
    );
    expected.insert(
        "checkin".to_string(),
        request.bookingdates().checkin().format("%Y-%m-%d").to_string(),
    );
    expected.insert(
        "checkout".to_string(),
        request.bookingdates().checkout().format("%Y-%m-%d").to_string(),
    );
    expected
}

/// Create a booking, then confirm every structural field of the live
/// resource within the bounded-retry policy.
pub async fn create_and_verify_booking(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ops = harness(config)?;
    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 1, 1),
        date(2024, 1, 5),
        111,
        true,
        None,
    )?);
    ops.create_booking().await?;

    let expected = ops.current_request()?.clone();
    verify_complete_booking_eventually(&expected, || ops.fetch_current(), &policy(config)).await?;
    Ok(())
}

/// Create a test booking, fetch it back by the id kept in the scenario
/// context, and check the returned details and date semantics.
pub async fn fetch_booking_details(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ctx = ScenarioContext::new();
    let mut ops = harness(config)?;

    // Given a test booking exists
    ops.prepare_booking(booking_request(
        "Sally",
        "Fields",
        date(2024, 4, 1),
        date(2024, 4, 7),
        200,
        false,
        Some("Lunch"),
    )?);
    let id = ops.create_booking().await?;
    ctx.set_test_booking_id(id);

    // When details are requested for the test booking
    let id = ctx
        .test_booking_id()
        .ok_or_else(|| state_error("test booking id not found in scenario context"))?;
    let response = ops.get_booking(id).await?;
    if response.status != StatusCode::OK {
        return Err(assertion_error(format!(
            "expected status 200 fetching booking {}, got {}",
            id, response.status
        )));
    }
    let body = response
        .body
        .clone()
        .ok_or_else(|| assertion_error("booking response carries no JSON body"))?;

    // Then the response matches the test data
    let mut expected = BTreeMap::new();
    expected.insert("firstname".to_string(), "Sally".to_string());
    expected.insert("lastname".to_string(), "Fields".to_string());
    expected.insert("checkin".to_string(), "2024-04-01".to_string());
    expected.insert("checkout".to_string(), "2024-04-07".to_string());
    if let AttemptOutcome::Mismatch(mismatches) = match_fields(&expected, &body) {
        return Err(assertion_error(join_mismatches(&mismatches)));
    }

    // And the booking dates are well-formed and ordered
    verify_response_dates_valid(&body)?;
    Ok(())
}

fn verify_response_dates_valid(body: &Value) -> Result<(), BookcheckError> {
    let checkin = read_response_date(body, "bookingdates.checkin")?;
    let checkout = read_response_date(body, "bookingdates.checkout")?;
    if checkin >= checkout {
        return Err(assertion_error(format!(
            "checkin {} should be before checkout {}",
            checkin, checkout
        )));
    }
    Ok(())
}

fn read_response_date(body: &Value, path: &str) -> Result<NaiveDate, BookcheckError> {
    let raw = lookup(body, path)
        .and_then(value_as_string)
        .ok_or_else(|| assertion_error(format!("{} missing from response", path)))?;
    parse_wire_date(&raw)
        .map_err(|_| assertion_error(format!("{} is not a yyyy-MM-dd date: {}", path, raw)))
}

/// The unfiltered listing is non-empty and contains the booking created
/// for this scenario.
pub async fn booking_listing_contains_created(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ops = harness(config)?;
    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 1, 1),
        date(2024, 1, 5),
        111,
        true,
        None,
    )?);
    let id = ops.create_booking().await?;

    let ids = ops.list_ids(None).await?;
    if ids.is_empty() {
        return Err(assertion_error("booking id listing should not be empty"));
    }
    if !ids.contains(&id) {
        return Err(assertion_error(format!(
            "listing should contain created booking id {}",
            id
        )));
    }
    info!("Listing contains created booking (total: {})", ids.len());
    Ok(())
}

/// Every booking returned by a firstname/lastname filter actually carries
/// the filtered name.
pub async fn filtered_listing_by_name(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ctx = ScenarioContext::new();
    let mut ops = harness(config)?;

    ops.prepare_booking(booking_request(
        "Sally",
        "Fields",
        date(2024, 4, 1),
        date(2024, 4, 7),
        200,
        false,
        None,
    )?);
    let created = ops.create_booking().await?;

    ctx.set_name_filters("Sally", "Fields");
    let filter = BookingFilter::by_name("Sally", "Fields");
    let ids = ops.list_ids(Some(&filter)).await?;
    if !ids.contains(&created) {
        return Err(assertion_error(format!(
            "filtered listing should contain created booking id {}",
            created
        )));
    }

    let firstname = ctx
        .filter_firstname()
        .ok_or_else(|| state_error("name filter not found in scenario context"))?
        .to_string();
    let lastname = ctx
        .filter_lastname()
        .ok_or_else(|| state_error("name filter not found in scenario context"))?
        .to_string();

    for id in ids {
        let response = ops.client().get_booking(id).await?;
        let body = response
            .body
            .ok_or_else(|| assertion_error(format!("booking {} has no JSON body", id)))?;
        let mut expected = BTreeMap::new();
        expected.insert("firstname".to_string(), firstname.clone());
        expected.insert("lastname".to_string(), lastname.clone());
        if let AttemptOutcome::Mismatch(mismatches) = match_fields(&expected, &body) {
            return Err(assertion_error(format!(
                "booking {} does not match the name filter: {}",
                id,
                join_mismatches(&mismatches)
            )));
        }
    }
    Ok(())
}

/// Every booking returned by a checkin/checkout filter stays within the
/// filtered date range.
pub async fn filtered_listing_by_dates(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ctx = ScenarioContext::new();
    let mut ops = harness(config)?;

    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 6, 10),
        date(2024, 6, 15),
        111,
        true,
        None,
    )?);
    let created = ops.create_booking().await?;

    ctx.set_date_filters("2024-06-01", "2024-06-30");
    let filter_checkin = ctx
        .filter_checkin()
        .ok_or_else(|| state_error("date filter not found in scenario context"))?
        .to_string();
    let filter_checkout = ctx
        .filter_checkout()
        .ok_or_else(|| state_error("date filter not found in scenario context"))?
        .to_string();
    let from = parse_wire_date(&filter_checkin)
        .map_err(|_| state_error("stored checkin filter is not a date"))?;
    let until = parse_wire_date(&filter_checkout)
        .map_err(|_| state_error("stored checkout filter is not a date"))?;

    let filter = BookingFilter::by_dates(from, until);
    let ids = ops.list_ids(Some(&filter)).await?;
    if !ids.contains(&created) {
        return Err(assertion_error(format!(
            "date-filtered listing should contain created booking id {}",
            created
        )));
    }

    for id in ids {
        let response = ops.client().get_booking(id).await?;
        let body = response
            .body
            .ok_or_else(|| assertion_error(format!("booking {} has no JSON body", id)))?;
        let checkin = read_response_date(&body, "bookingdates.checkin")?;
        let checkout = read_response_date(&body, "bookingdates.checkout")?;
        if checkin < from {
            return Err(assertion_error(format!(
                "booking {} checkin {} is before the filter {}",
                id, checkin, from
            )));
        }
        if checkout > until {
            return Err(assertion_error(format!(
                "booking {} checkout {} is after the filter {}",
                id, checkout, until
            )));
        }
    }
    Ok(())
}

/// Full update: every updated field must become visible within the retry
/// policy, read back through the nested-path rule for the dates.
pub async fn full_update_and_verify(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ops = harness(config)?;
    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 1, 1),
        date(2024, 1, 5),
        111,
        true,
        None,
    )?);
    ops.create_booking().await?;

    let token = generate_valid_token(config).await?;
    let updated = booking_request(
        "Jim",
        "Braun",
        date(2024, 3, 1),
        date(2024, 3, 5),
        150,
        false,
        Some("Dinner"),
    )?;
    let status = ops.update_current(updated, &token).await?;
    if status != StatusCode::OK {
        return Err(assertion_error(format!(
            "expected status 200 updating booking, got {}",
            status
        )));
    }

    let expected = expected_fields_for(ops.current_request()?);
    verify_fields_eventually(&expected, || ops.fetch_current(), &policy(config)).await?;
    Ok(())
}

/// Partial update of only the checkin date; the verification must read the
/// nested `bookingdates.checkin` path, not a top-level `checkin` key.
pub async fn partial_update_checkin_and_verify(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ops = harness(config)?;
    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 1, 1),
        date(2024, 1, 5),
        111,
        true,
        None,
    )?);
    ops.create_booking().await?;

    let token = generate_valid_token(config).await?;
    let mut fields = BTreeMap::new();
    fields.insert("checkin".to_string(), "2024-02-01".to_string());
    let status = ops.partial_update_current(&fields, &token).await?;
    if status != StatusCode::OK {
        return Err(assertion_error(format!(
            "expected status 200 patching booking, got {}",
            status
        )));
    }

    verify_fields_eventually(&fields, || ops.fetch_current(), &policy(config)).await?;
    Ok(())
}

/// Delete the created booking; the service answers 201, after which the
/// booking must no longer exist.
pub async fn delete_booking_and_verify(config: &AppConfig) -> Result<(), BookcheckError> {
    let mut ops = harness(config)?;
    ops.prepare_booking(booking_request(
        "James",
        "Brown",
        date(2024, 1, 1),
        date(2024, 1, 5),
        111,
        true,
        None,
    )?);
    let id = ops.create_booking().await?;

    let token = generate_valid_token(config).await?;
    let status = ops.delete_current(&token).await?;
    if status != StatusCode::CREATED {
        return Err(assertion_error(format!(
            "expected status 201 deleting booking, got {}",
            status
        )));
    }

    if ops.booking_exists(id).await? {
        return Err(assertion_error(format!(
            "booking {} should no longer exist after deletion",
            id
        )));
    }
    info!("Booking {} deleted and absence verified", id);
    Ok(())
}
