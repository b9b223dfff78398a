// --- File: crates/bookcheck_scenarios/src/ping.rs ---
//! Health-check scenario.

use bookcheck_api::BookingApiClient;
use bookcheck_common::{assertion_error, BookcheckError};
use bookcheck_config::AppConfig;
use http::StatusCode;
use tracing::info;

/// The service signals "up" with 201 on `GET /ping`, not 200. The harness
/// asserts the literal convention of the service it certifies.
pub async fn api_health_check(config: &AppConfig) -> Result<(), BookcheckError> {
    let client = BookingApiClient::new(&config.api)?;
    let status = client.ping().await?;
    info!("Verifying API health status (expected 201, got {})", status);
    if status != StatusCode::CREATED {
        return Err(assertion_error(format!(
            "API is not running as expected (status: {})",
            status
        )));
    }
    Ok(())
}
