// --- File: crates/bookcheck_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;   // Error handling
pub mod http;    // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    assertion_error, config_error, internal_error, state_error, transport_error, validation_error,
    BookcheckError, Context,
};

// Re-export HTTP utilities for easier access
pub use http::client::create_client;
