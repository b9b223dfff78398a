// --- File: crates/bookcheck_api/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
pub mod models;
#[cfg(test)]
mod models_proptest;
pub mod ops;

// Re-export the types the scenario and verification crates work with
pub use client::{ApiResponse, BookingApiClient};
pub use error::ApiError;
pub use models::{
    AuthRequest, AuthResponse, BookingDates, BookingFilter, BookingId, BookingRequest,
    BookingResponse, ValidationError, DEFAULT_ADDITIONAL_NEEDS,
};
pub use ops::BookingOps;
