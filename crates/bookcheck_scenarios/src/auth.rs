// --- File: crates/bookcheck_scenarios/src/auth.rs ---
//! Authentication scenarios.

use bookcheck_api::{ApiError, AuthRequest, BookingApiClient};
use bookcheck_common::{assertion_error, BookcheckError};
use bookcheck_config::AppConfig;
use tracing::info;

/// Generates a session token with the configured admin credentials.
/// Shared by every scenario that performs an authenticated mutation.
pub async fn generate_valid_token(config: &AppConfig) -> Result<String, BookcheckError> {
    let client = BookingApiClient::new(&config.api)?;
    let request = AuthRequest::new(&config.auth.username, &config.auth.password)?;
    let token = client.create_token(&request).await?;
    Ok(token)
}

/// Admin credentials yield a non-empty token.
pub async fn token_generation(config: &AppConfig) -> Result<(), BookcheckError> {
    let token = generate_valid_token(config).await?;
    if token.trim().is_empty() {
        return Err(assertion_error("token should not be empty"));
    }
    info!("Token verified (length: {})", token.len());
    Ok(())
}

/// Made-up credentials must be rejected with a reason, not answered with
/// a token.
pub async fn token_rejected_for_invalid_credentials(
    config: &AppConfig,
) -> Result<(), BookcheckError> {
    let client = BookingApiClient::new(&config.api)?;
    let request = AuthRequest::new("invalid", "credentials")?;
    match client.create_token(&request).await {
        Err(ApiError::AuthRejected(reason)) => {
            info!("Credentials rejected as expected: {}", reason);
            Ok(())
        }
        Ok(_) => Err(assertion_error(
            "expected invalid credentials to be rejected, but a token was issued",
        )),
        Err(other) => Err(other.into()),
    }
}
