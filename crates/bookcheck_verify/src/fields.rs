// --- File: crates/bookcheck_verify/src/fields.rs ---
//! Field extraction and comparison against a fetched JSON representation.
//!
//! The booking document keeps its dates nested: `checkin`/`checkout` live
//! under `bookingdates`, everything else at the top level. Scalar values
//! are compared in their canonical JSON text form, so a price stored as a
//! number still matches the expectation string "150".

use std::collections::BTreeMap;

use bookcheck_api::BookingRequest;
use chrono::Duration;
use serde_json::Value;

use crate::dates::{dates_match_within, parse_wire_date, DATE_FORMAT};
use crate::error::VerifyError;
use crate::outcome::{AttemptOutcome, FieldMismatch};

/// Fields that resolve under the nested `bookingdates` object.
pub fn is_date_field(field: &str) -> bool {
    field == "checkin" || field == "checkout"
}

/// The JSON path an expected field resolves at.
pub fn response_path(field: &str) -> String {
    if is_date_field(field) {
        format!("bookingdates.{}", field)
    } else {
        field.to_string()
    }
}

/// Resolves a dotted path inside a JSON document.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |node, key| node.get(key))
}

/// Canonical text form of a scalar JSON value. Objects, arrays and null
/// have no scalar form and read as absent.
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Checks every expected field against the document by exact string
/// equality, using the nested-path rule for date fields.
pub fn match_fields(expected: &BTreeMap<String, String>, doc: &Value) -> AttemptOutcome {
    let mut mismatches = Vec::new();
    for (field, expected_value) in expected {
        let actual = lookup(doc, &response_path(field)).and_then(value_as_string);
        if actual.as_deref() != Some(expected_value.as_str()) {
            mismatches.push(FieldMismatch::new(field, expected_value, actual));
        }
    }
    if mismatches.is_empty() {
        AttemptOutcome::Pass
    } else {
        AttemptOutcome::Mismatch(mismatches)
    }
}

/// Checks every structural field of a booking: names, price, deposit flag
/// and additional needs by exact equality, both dates tolerantly. All
/// mismatches found in the attempt are reported together. A date the
/// server answers in a shape the harness cannot parse is a fatal error,
/// not a mismatch.
pub fn match_complete_booking(
    expected: &BookingRequest,
    doc: &Value,
    tolerance: Duration,
) -> Result<AttemptOutcome, VerifyError> {
    let mut mismatches = Vec::new();

    check_scalar(&mut mismatches, doc, "firstname", expected.firstname());
    check_scalar(&mut mismatches, doc, "lastname", expected.lastname());
    check_scalar(
        &mut mismatches,
        doc,
        "totalprice",
        &expected.totalprice().to_string(),
    );
    check_scalar(
        &mut mismatches,
        doc,
        "depositpaid",
        &expected.depositpaid().to_string(),
    );
    check_scalar(
        &mut mismatches,
        doc,
        "additionalneeds",
        expected.additionalneeds(),
    );

    check_date(
        &mut mismatches,
        doc,
        "checkin",
        expected.bookingdates().checkin(),
        tolerance,
    )?;
    check_date(
        &mut mismatches,
        doc,
        "checkout",
        expected.bookingdates().checkout(),
        tolerance,
    )?;

    if mismatches.is_empty() {
        Ok(AttemptOutcome::Pass)
    } else {
        Ok(AttemptOutcome::Mismatch(mismatches))
    }
}

fn check_scalar(mismatches: &mut Vec<FieldMismatch>, doc: &Value, field: &str, expected: &str) {
    let actual = lookup(doc, field).and_then(value_as_string);
    if actual.as_deref() != Some(expected) {
        mismatches.push(FieldMismatch::new(field, expected, actual));
    }
}

fn check_date(
    mismatches: &mut Vec<FieldMismatch>,
    doc: &Value,
    field: &str,
    expected: chrono::NaiveDate,
    tolerance: Duration,
) -> Result<(), VerifyError> {
    let expected_str = expected.format(DATE_FORMAT).to_string();
    let Some(actual) = lookup(doc, &response_path(field)).and_then(value_as_string) else {
        mismatches.push(FieldMismatch::new(field, expected_str, None));
        return Ok(());
    };

    let actual_date = parse_wire_date(&actual).map_err(|_| VerifyError::MalformedDate {
        field: field.to_string(),
        value: actual.clone(),
    })?;

    if !dates_match_within(expected, actual_date, tolerance) {
        mismatches.push(FieldMismatch::new(field, expected_str, Some(actual)));
    }
    Ok(())
}
