// --- File: crates/bookcheck_verify/src/error.rs ---
use bookcheck_api::ApiError;
use bookcheck_common::BookcheckError;
use thiserror::Error;

use crate::outcome::{join_mismatches, FieldMismatch};

/// Terminal verification failures.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Every attempt mismatched; carries the detail from the LAST attempt.
    #[error("Field verification failed after {attempts} attempts: {}", join_mismatches(.mismatches))]
    Exhausted {
        attempts: u32,
        mismatches: Vec<FieldMismatch>,
    },

    /// An empty expectation map verifies nothing and is rejected up front.
    #[error("Expected fields must not be empty")]
    EmptyExpectation,

    /// The fetch callback failed. Fatal; never retried and never reported
    /// as a mismatch.
    #[error("Fetch failed during verification: {0}")]
    FetchFailed(#[from] ApiError),

    /// The server answered a date the harness cannot parse. Fatal.
    #[error("Malformed date in response field '{field}': {value}")]
    MalformedDate { field: String, value: String },
}

/// Convert VerifyError to BookcheckError
impl From<VerifyError> for BookcheckError {
    fn from(err: VerifyError) -> Self {
        match err {
            exhausted @ VerifyError::Exhausted { .. } => {
                BookcheckError::AssertionError(exhausted.to_string())
            }
            VerifyError::EmptyExpectation => {
                BookcheckError::ValidationError("expected fields must not be empty".to_string())
            }
            VerifyError::FetchFailed(api) => api.into(),
            malformed @ VerifyError::MalformedDate { .. } => {
                BookcheckError::TransportError(malformed.to_string())
            }
        }
    }
}
