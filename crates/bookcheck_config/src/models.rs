// --- File: crates/bookcheck_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Target API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the booking service under test, e.g. "https://restful-booker.herokuapp.com"
    pub base_url: String,
    /// Per-request timeout applied to every call. The reference service has
    /// no server-side limit, so an unset value here would mean unbounded blocking.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

// --- Admin Credentials ---
// Password is expected to arrive via env override (BOOKCHECK_AUTH__PASSWORD)
// rather than a checked-in config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

// --- Verification Policy Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerifyConfig {
    /// Bounded attempt count for eventual-consistency checks.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay between attempts, milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Calendar-date comparison tolerance, hours.
    #[serde(default = "default_date_tolerance_hours")]
    pub date_tolerance_hours: i64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_date_tolerance_hours() -> i64 {
    24
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            date_tolerance_hours: default_date_tolerance_hours(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Target API config is mandatory
    pub api: ApiConfig,

    // Admin credentials are mandatory (token scenarios cannot run without them)
    pub auth: AuthConfig,

    // Verification policy defaults to 3 attempts / 1000ms / 24h
    #[serde(default)]
    pub verify: VerifyConfig,
}
