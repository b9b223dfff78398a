// --- File: crates/bookcheck_verify/src/lib.rs ---
// Declare modules within this crate
pub mod dates;
pub mod engine;
pub mod error;
pub mod fields;
pub mod outcome;

// Re-export the verification surface
pub use dates::{dates_match_within, parse_wire_date, DATE_FORMAT, DEFAULT_DATE_TOLERANCE_HOURS};
pub use engine::{verify_complete_booking_eventually, verify_fields_eventually, VerifyPolicy};
pub use error::VerifyError;
pub use outcome::{AttemptOutcome, FieldMismatch};
