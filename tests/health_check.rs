//! Integration tests for the health check system

use sim_pointer::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed(),
        report.warned()
    );
    assert_eq!(report.total(), 4);
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_pointer_check_passes() {
    let result = PointerCheck::new().check();

    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "Pointer check failed: {} {:?}",
        result.message,
        result.details
    );
}

#[test]
fn test_module_check_passes() {
    let result = ModuleCheck::with_operators(3).check();
    assert_eq!(result.status, CheckStatus::Pass, "{}", result.message);

    let empty = ModuleCheck::with_operators(0).check();
    assert_eq!(empty.status, CheckStatus::Warn);
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(PointerCheck::new())
        .run();

    assert_eq!(report.total(), 2, "Expected 2 checks in report");
    assert_eq!(
        report.passed() + report.warned() + report.failed(),
        report.total()
    );
    assert_eq!(report.outcomes[1].name, "Simulated Pointer");
}

#[test]
fn test_report_mentions_every_system() {
    let report = health::run_all_checks();
    let text = health::format_report(&report);

    for outcome in &report.outcomes {
        assert!(text.contains(&outcome.name), "missing {}", outcome.name);
    }
}
