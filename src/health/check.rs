//! Core health check trait and types

use std::time::Duration;

use colored::Colorize;

/// Status of a system check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(&self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    /// The label colored for terminal output
    pub fn as_colored_str(&self) -> String {
        match self {
            CheckStatus::Pass => self.label().green().to_string(),
            CheckStatus::Warn => self.label().yellow().to_string(),
            CheckStatus::Fail => self.label().red().to_string(),
        }
    }
}

/// Result of a system check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One-line summary
    pub message: String,
    /// Multi-line breakdown, printed below the table
    pub details: Option<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A self-contained check of one subsystem
///
/// Checks must not need a window or real devices; they build whatever host
/// doubles they need and tear them down before returning.
pub trait SystemCheck {
    /// Name shown in the report
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    fn description(&self) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_orders_by_severity() {
        assert!(CheckStatus::Pass < CheckStatus::Warn);
        assert!(CheckStatus::Warn < CheckStatus::Fail);
        assert!(CheckStatus::Warn.is_ok());
        assert!(CheckStatus::Fail.is_fail());
    }
}
