//! Configuration system health check

use crate::config::{AppConfig, PointerConfig};
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that every profile loads and yields a usable pointer configuration
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Problems that would leave the pointer stuck or unbounded
fn pointer_problems(pointer: &PointerConfig) -> Vec<String> {
    let mut problems = Vec::new();

    for (name, speed) in [
        ("speed_mouse_keyboard", pointer.speed_mouse_keyboard),
        ("speed_gamepad", pointer.speed_gamepad),
    ] {
        if !speed.is_finite() || speed <= 0.0 {
            problems.push(format!("{} must be positive, got {}", name, speed));
        }
    }

    if !(pointer.bounds.width > 0.0 && pointer.bounds.height > 0.0) {
        problems.push(format!(
            "bounds must have a positive size, got {}x{}",
            pointer.bounds.width, pointer.bounds.height
        ));
    }

    problems
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration profiles and pointer settings")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut all_success = true;
        let mut has_warnings = false;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    let problems = pointer_problems(&config.pointer);
                    if problems.is_empty() {
                        details.push(format!(
                            "  ✓ Profile '{}': pointer speed {}/{} in {}x{}",
                            profile,
                            config.pointer.speed_mouse_keyboard,
                            config.pointer.speed_gamepad,
                            config.pointer.bounds.width,
                            config.pointer.bounds.height
                        ));
                    } else {
                        for problem in problems {
                            details.push(format!("  ⚠ Profile '{}': {}", profile, problem));
                        }
                        has_warnings = true;
                    }
                }
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    all_success = false;
                }
            }
        }

        let details_str = details.join("\n");

        if !all_success {
            CheckResult::fail("Failed to load one or more config profiles")
                .with_details(details_str)
        } else if has_warnings {
            CheckResult::warn("Pointer settings need attention").with_details(details_str)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details_str)
        }
    }
}
