// --- File: crates/bookcheck_scenarios/src/lib.rs ---

// Declare modules within this crate
pub mod auth;    // Authentication scenarios
pub mod booking; // Booking CRUD scenarios
pub mod context; // Per-scenario shared state
pub mod ping;    // Health-check scenario
pub mod report;  // Result aggregation
pub mod suite;   // Sequential suite execution

// Re-export the runner surface
pub use context::ScenarioContext;
pub use report::{ScenarioReport, ScenarioResult};
pub use suite::run_suite;
