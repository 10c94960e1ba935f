//! Runs health checks and collects their outcomes

use std::time::Instant;

use tracing::{debug, error, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// One finished check
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    /// Outcomes in the order the checks were added
    pub outcomes: Vec<CheckOutcome>,
}

impl HealthCheckReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// Worst status across all checks; an empty report passes
    pub fn status(&self) -> CheckStatus {
        self.outcomes
            .iter()
            .map(|o| o.result.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// No failures
    pub fn is_healthy(&self) -> bool {
        self.status().is_ok()
    }

    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// Process exit code: 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
            CheckStatus::Warn => 2,
        }
    }

    /// Outcomes that did not pass cleanly
    pub fn problems(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.result.status != CheckStatus::Pass)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.status == status)
            .count()
    }
}

/// Orchestrates running health checks and collecting results
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs every check in order, timing each one
    pub fn run(self) -> HealthCheckReport {
        let outcomes = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check().with_duration(start.elapsed());

                match result.status {
                    CheckStatus::Pass => {
                        debug!(check = check.name(), duration = ?result.duration, "Check passed")
                    }
                    CheckStatus::Warn => {
                        warn!(check = check.name(), message = %result.message, "Check warned")
                    }
                    CheckStatus::Fail => {
                        error!(check = check.name(), message = %result.message, "Check failed")
                    }
                }

                CheckOutcome {
                    name: check.name().to_string(),
                    description: check.description(),
                    result,
                }
            })
            .collect();

        HealthCheckReport { outcomes }
    }
}
