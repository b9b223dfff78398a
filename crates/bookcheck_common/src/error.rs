// --- File: crates/bookcheck_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all harness failures.
///
/// The variants mirror the failure taxonomy every scenario step reports in:
/// construction problems, expectation mismatches, transport trouble, and
/// operations invoked out of order. Each crate can extend this by
/// implementing From<SpecificError> for BookcheckError.
#[derive(Error, Debug)]
pub enum BookcheckError {
    /// Malformed construction input (empty names, checkin after checkout,
    /// empty credentials). Never retried.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Expected-vs-actual mismatch. Retryable inside the verification
    /// engine only; fatal once attempts are exhausted.
    #[error("Assertion failed: {0}")]
    AssertionError(String),

    /// Network/connection failure or a non-deserializable response.
    /// Surfaced immediately, never masked as an assertion mismatch.
    #[error("Transport failure: {0}")]
    TransportError(String),

    /// Operation invoked before required prior state exists
    /// (e.g. verifying a booking before one was created).
    #[error("Illegal harness state: {0}")]
    StateError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error that doesn't fit into any other category
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl BookcheckError {
    /// Whether the verification engine is allowed to retry after this error.
    /// Only assertion mismatches are transient; everything else is terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookcheckError::AssertionError(_))
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, BookcheckError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, BookcheckError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, BookcheckError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| BookcheckError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BookcheckError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| BookcheckError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for BookcheckError {
    fn from(err: reqwest::Error) -> Self {
        BookcheckError::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for BookcheckError {
    fn from(err: serde_json::Error) -> Self {
        BookcheckError::TransportError(err.to_string())
    }
}

impl From<std::io::Error> for BookcheckError {
    fn from(err: std::io::Error) -> Self {
        BookcheckError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::ValidationError(message.to_string())
}

pub fn assertion_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::AssertionError(message.to_string())
}

pub fn transport_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::TransportError(message.to_string())
}

pub fn state_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::StateError(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::ConfigError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> BookcheckError {
    BookcheckError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_assertion_errors_are_retryable() {
        assert!(assertion_error("firstname mismatch").is_retryable());
        assert!(!transport_error("connection refused").is_retryable());
        assert!(!state_error("no booking created yet").is_retryable());
        assert!(!validation_error("firstname cannot be empty").is_retryable());
    }

    #[test]
    fn context_wraps_source_error_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("reading report").unwrap_err();
        assert!(err.to_string().contains("reading report"));
        assert!(err.to_string().contains("boom"));
    }
}
