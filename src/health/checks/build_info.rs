//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that build metadata was captured
///
/// Missing git metadata only warns, since source tarballs build without it.
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let details: Vec<String> = build_info::detailed_info()
            .lines()
            .map(|line| format!("  {}", line))
            .collect();

        if build_info::RUSTC_SEMVER.is_empty() || build_info::CARGO_TARGET_TRIPLE.is_empty() {
            return CheckResult::fail("Compiler metadata missing").with_details(details.join("\n"));
        }

        if build_info::GIT_SHA.is_none() {
            return CheckResult::warn("Built outside a git checkout")
                .with_details(details.join("\n"));
        }

        CheckResult::pass(build_info::version_string()).with_details(details.join("\n"))
    }
}
