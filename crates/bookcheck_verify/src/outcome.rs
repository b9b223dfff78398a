// --- File: crates/bookcheck_verify/src/outcome.rs ---
//! Typed per-attempt outcomes.
//!
//! The retry loop decides by inspecting these values; transient and
//! terminal failures are never funneled through one catch-all error.

use std::fmt;

/// One expected-vs-actual divergence found during an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: String,
    pub expected: String,
    /// The value found in the response, or None when the field was absent
    /// or not representable as a scalar.
    pub actual: Option<String>,
}

impl FieldMismatch {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: Option<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual,
        }
    }
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "{} mismatch (expected: {}, actual: {})",
                self.field, self.expected, actual
            ),
            None => write!(
                f,
                "{} mismatch (expected: {}, actual: <absent>)",
                self.field, self.expected
            ),
        }
    }
}

/// Result of checking one fetched representation against expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Every expected field matched.
    Pass,
    /// At least one field diverged; retryable while attempts remain.
    Mismatch(Vec<FieldMismatch>),
}

impl AttemptOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, AttemptOutcome::Pass)
    }
}

/// Renders a mismatch list for log lines and error messages.
pub fn join_mismatches(mismatches: &[FieldMismatch]) -> String {
    if mismatches.is_empty() {
        return "no mismatch detail recorded".to_string();
    }
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
