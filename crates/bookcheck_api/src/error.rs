// --- File: crates/bookcheck_api/src/error.rs ---
use crate::models::ValidationError;
use bookcheck_common::BookcheckError;
use thiserror::Error;

/// Booking-API-specific error types.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error occurred during a booking API request
    #[error("Booking API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Unexpected status returned by the booking API on a call that must succeed
    #[error("Booking API returned an error: {body} (Status: {status})")]
    UnexpectedStatus { status: u16, body: String },

    /// Error parsing a booking API response
    #[error("Failed to parse booking API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Credentials rejected by the auth endpoint
    #[error("Authentication rejected by booking API: {0}")]
    AuthRejected(String),

    /// Creation answered with a non-positive booking id
    #[error("Booking id must be greater than 0, got {0}")]
    InvalidBookingId(i64),

    /// Booking operation requested before a request was prepared
    #[error("No booking request has been prepared")]
    NoPreparedRequest,

    /// Booking operation requested before a booking was created
    #[error("No booking has been created yet")]
    NoCurrentBooking,

    /// Model construction failed
    #[error("Invalid booking data: {0}")]
    InvalidModel(#[from] ValidationError),
}

/// Convert ApiError to BookcheckError
impl From<ApiError> for BookcheckError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestError(e) => {
                BookcheckError::TransportError(format!("booking API request error: {}", e))
            }
            ApiError::UnexpectedStatus { status, body } => BookcheckError::TransportError(format!(
                "booking API answered status {}: {}",
                status, body
            )),
            ApiError::ParseError(e) => {
                BookcheckError::TransportError(format!("booking API response parse error: {}", e))
            }
            ApiError::AuthRejected(reason) => {
                BookcheckError::AssertionError(format!("authentication rejected: {}", reason))
            }
            ApiError::InvalidBookingId(id) => BookcheckError::AssertionError(format!(
                "booking id should be greater than 0, got {}",
                id
            )),
            ApiError::NoPreparedRequest => {
                BookcheckError::StateError("no booking request has been prepared".to_string())
            }
            ApiError::NoCurrentBooking => {
                BookcheckError::StateError("no booking has been created yet".to_string())
            }
            ApiError::InvalidModel(e) => BookcheckError::ValidationError(e.to_string()),
        }
    }
}

impl From<ValidationError> for BookcheckError {
    fn from(err: ValidationError) -> Self {
        BookcheckError::ValidationError(err.to_string())
    }
}
