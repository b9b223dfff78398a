// --- File: crates/bookcheck_scenarios/src/suite.rs ---
//! Sequential execution of the acceptance scenario suite.

use std::future::Future;
use std::time::Instant;

use bookcheck_common::BookcheckError;
use bookcheck_config::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

use crate::report::{ScenarioReport, ScenarioResult};
use crate::{auth, booking, ping};

/// Runs every scenario in order, one at a time, against the configured
/// service. A failing scenario is recorded and the suite moves on.
pub async fn run_suite(config: &AppConfig) -> ScenarioReport {
    info!("Running acceptance suite against {}", config.api.base_url);
    let mut report = ScenarioReport::default();

    run_one(&mut report, "API health check", ping::api_health_check(config)).await;
    run_one(
        &mut report,
        "Auth token generation",
        auth::token_generation(config),
    )
    .await;
    run_one(
        &mut report,
        "Auth rejection for invalid credentials",
        auth::token_rejected_for_invalid_credentials(config),
    )
    .await;
    run_one(
        &mut report,
        "Create booking and verify complete state",
        booking::create_and_verify_booking(config),
    )
    .await;
    run_one(
        &mut report,
        "Fetch booking details by id",
        booking::fetch_booking_details(config),
    )
    .await;
    run_one(
        &mut report,
        "Listing contains created booking",
        booking::booking_listing_contains_created(config),
    )
    .await;
    run_one(
        &mut report,
        "Filtered listing by name",
        booking::filtered_listing_by_name(config),
    )
    .await;
    run_one(
        &mut report,
        "Filtered listing by date range",
        booking::filtered_listing_by_dates(config),
    )
    .await;
    run_one(
        &mut report,
        "Full update with eventual verification",
        booking::full_update_and_verify(config),
    )
    .await;
    run_one(
        &mut report,
        "Partial date update with nested-path verification",
        booking::partial_update_checkin_and_verify(config),
    )
    .await;
    run_one(
        &mut report,
        "Delete booking and verify absence",
        booking::delete_booking_and_verify(config),
    )
    .await;

    report
}

async fn run_one(
    report: &mut ScenarioReport,
    name: &'static str,
    scenario: impl Future<Output = Result<(), BookcheckError>>,
) {
    let run_id = Uuid::new_v4();
    info!("Starting scenario '{}' (run {})", name, run_id);
    let started = Instant::now();
    let outcome = scenario.await;
    let duration = started.elapsed();

    match &outcome {
        Ok(()) => info!("Scenario '{}' passed in {}ms", name, duration.as_millis()),
        Err(err) => error!(
            "Scenario '{}' failed after {}ms: {}",
            name,
            duration.as_millis(),
            err
        ),
    }

    report.push(ScenarioResult {
        name,
        run_id,
        outcome,
        duration,
    });
}
