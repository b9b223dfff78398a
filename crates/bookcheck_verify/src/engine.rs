// --- File: crates/bookcheck_verify/src/engine.rs ---
//! Bounded-retry verification.
//!
//! The booking service is allowed a short propagation delay between a
//! successful write and full read consistency, so a single-shot check is
//! flaky. Each verification polls the live resource up to a bounded number
//! of attempts with a fixed delay in between. Only a field mismatch is
//! retried; a fetch failure or malformed server data aborts immediately.
//!
//! The whole verification is one future: dropping it during the delay
//! cancels the run outright, so an aborted wait can never continue
//! silently.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use bookcheck_api::{ApiError, BookingRequest};
use bookcheck_config::VerifyConfig;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::dates::DEFAULT_DATE_TOLERANCE_HOURS;
use crate::error::VerifyError;
use crate::fields::{match_complete_booking, match_fields};
use crate::outcome::{join_mismatches, AttemptOutcome};

/// Retry policy for eventual-consistency verification.
#[derive(Debug, Clone)]
pub struct VerifyPolicy {
    /// Bounded attempt count.
    pub max_attempts: u32,
    /// Delay between attempts.
    pub retry_delay: Duration,
    /// Tolerance for calendar-date comparison.
    pub date_tolerance: chrono::Duration,
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(1000),
            date_tolerance: chrono::Duration::hours(DEFAULT_DATE_TOLERANCE_HOURS),
        }
    }
}

impl VerifyPolicy {
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            date_tolerance: chrono::Duration::hours(config.date_tolerance_hours),
        }
    }
}

/// Verifies that the named fields of the live resource match their expected
/// string representations, within the policy's attempt bound.
///
/// `checkin`/`checkout` expectations resolve under `bookingdates.<field>`
/// in the fetched document; everything else resolves at the top level.
/// Returns the number of attempts used. On exhaustion the error carries
/// the mismatches of the last attempt.
pub async fn verify_fields_eventually<F, Fut>(
    expected: &BTreeMap<String, String>,
    fetch: F,
    policy: &VerifyPolicy,
) -> Result<u32, VerifyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, ApiError>>,
{
    if expected.is_empty() {
        return Err(VerifyError::EmptyExpectation);
    }
    info!("Verifying {} booking field(s)", expected.len());
    verify_eventually(fetch, policy, |doc| Ok(match_fields(expected, doc))).await
}

/// Verifies every structural field of the booking against `expected`:
/// names, price, deposit flag and additional needs by exact equality,
/// both dates by date-tolerant comparison.
pub async fn verify_complete_booking_eventually<F, Fut>(
    expected: &BookingRequest,
    fetch: F,
    policy: &VerifyPolicy,
) -> Result<u32, VerifyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, ApiError>>,
{
    info!(
        "Verifying complete booking for {} {}",
        expected.firstname(),
        expected.lastname()
    );
    verify_eventually(fetch, policy, |doc| {
        match_complete_booking(expected, doc, policy.date_tolerance)
    })
    .await
}

/// The shared retry loop. One fetch per attempt; a passing check returns
/// immediately with no further delay, a mismatch sleeps and retries while
/// attempts remain, and a checker/fetch error is terminal on the spot.
async fn verify_eventually<F, Fut, M>(
    mut fetch: F,
    policy: &VerifyPolicy,
    mut check: M,
) -> Result<u32, VerifyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, ApiError>>,
    M: FnMut(&Value) -> Result<AttemptOutcome, VerifyError>,
{
    let mut last_mismatches = Vec::new();

    for attempt in 1..=policy.max_attempts {
        let doc = fetch().await?;

        match check(&doc)? {
            AttemptOutcome::Pass => {
                info!("Booking fields verified successfully after {} attempt(s)", attempt);
                return Ok(attempt);
            }
            AttemptOutcome::Mismatch(mismatches) => {
                if attempt < policy.max_attempts {
                    warn!(
                        "Field verification failed on attempt {}/{}: {} - retrying...",
                        attempt,
                        policy.max_attempts,
                        join_mismatches(&mismatches)
                    );
                    sleep(policy.retry_delay).await;
                }
                last_mismatches = mismatches;
            }
        }
    }

    error!(
        "Field verification failed after {} attempts: {}",
        policy.max_attempts,
        join_mismatches(&last_mismatches)
    );
    Err(VerifyError::Exhausted {
        attempts: policy.max_attempts,
        mismatches: last_mismatches,
    })
}
