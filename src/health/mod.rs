//! Health check system for validating startup and input plumbing
//!
//! Runs without a window or devices, so it is usable from CI:
//! - Configuration profiles load and carry sane pointer settings
//! - A scripted pointer moves, hovers, clicks and clamps
//! - The input module drives every registered operator once per frame
//!
//! # Example
//!
//! ```no_run
//! use sim_pointer::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(PointerCheck::new())
//!     .add_check(ModuleCheck::new())
//!     .add_check(BuildInfoCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::PointerCheck::new())
        .add_check(checks::ModuleCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .run()
}
