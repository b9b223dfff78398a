// --- File: crates/bookcheck_verify/src/dates.rs ---
//! Date-tolerant comparison.
//!
//! Wire dates are UTC calendar dates (`yyyy-MM-dd`, no time-of-day). Two
//! dates match when their UTC midnight instants differ by no more than the
//! tolerance. The reference behavior carried both a 24h and a 12h constant
//! on different paths; a single configurable tolerance replaces them, with
//! 24 hours as the default (see DESIGN.md).

use chrono::{Duration, NaiveDate, NaiveTime};

/// Wire format for booking dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default comparison tolerance, hours.
pub const DEFAULT_DATE_TOLERANCE_HOURS: i64 = 24;

/// Parses a `yyyy-MM-dd` wire date.
pub fn parse_wire_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Whether two calendar dates fall within `tolerance` of each other,
/// compared at UTC midnight.
pub fn dates_match_within(expected: NaiveDate, actual: NaiveDate, tolerance: Duration) -> bool {
    let expected = expected.and_time(NaiveTime::MIN).and_utc();
    let actual = actual.and_time(NaiveTime::MIN).and_utc();
    (expected - actual).abs() <= tolerance
}
