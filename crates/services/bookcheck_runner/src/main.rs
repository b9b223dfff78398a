// File: services/bookcheck_runner/src/main.rs
use bookcheck_common::logging;
use bookcheck_config::load_config;
use bookcheck_scenarios::run_suite;
use tracing::{error, Level};

#[tokio::main]
async fn main() {
    // Keep the appender guard alive for the whole run, or buffered log
    // lines are dropped on exit.
    let _log_guard = logging::init_with_file(Level::INFO, "logs");

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load config: {}", err);
            eprintln!("Failed to load config: {}", err);
            std::process::exit(2);
        }
    };

    let report = run_suite(&config).await;
    report.log_summary();

    if !report.all_passed() {
        std::process::exit(1);
    }
}
