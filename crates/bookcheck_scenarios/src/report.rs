// --- File: crates/bookcheck_scenarios/src/report.rs ---
//! Scenario results and suite-level aggregation.

use std::time::Duration;

use bookcheck_common::BookcheckError;
use tracing::{error, info};
use uuid::Uuid;

/// Outcome of one scenario run.
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub run_id: Uuid,
    pub outcome: Result<(), BookcheckError>,
    pub duration: Duration,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregated results of a suite run.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    results: Vec<ScenarioResult>,
}

impl ScenarioReport {
    pub fn push(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// Logs one line per scenario and a closing summary line.
    pub fn log_summary(&self) {
        for result in &self.results {
            match &result.outcome {
                Ok(()) => info!(
                    "PASS {} ({}ms, run {})",
                    result.name,
                    result.duration.as_millis(),
                    result.run_id
                ),
                Err(err) => error!(
                    "FAIL {} ({}ms, run {}): {}",
                    result.name,
                    result.duration.as_millis(),
                    result.run_id,
                    err
                ),
            }
        }
        info!(
            "Suite finished: {} passed, {} failed, {} total",
            self.passed_count(),
            self.failed_count(),
            self.results.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookcheck_common::assertion_error;

    fn result(name: &'static str, outcome: Result<(), BookcheckError>) -> ScenarioResult {
        ScenarioResult {
            name,
            run_id: Uuid::new_v4(),
            outcome,
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn report_counts_passed_and_failed() {
        let mut report = ScenarioReport::default();
        report.push(result("a", Ok(())));
        report.push(result("b", Err(assertion_error("firstname mismatch"))));
        report.push(result("c", Ok(())));

        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn empty_report_counts_as_all_passed() {
        let report = ScenarioReport::default();
        assert!(report.all_passed());
    }
}
