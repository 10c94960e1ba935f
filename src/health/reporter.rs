//! Terminal formatting for health check reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::HealthCheckReport;

/// Formats a report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["System", "Status", "Duration", "Message"]);

    for outcome in &report.outcomes {
        builder.push_record([
            outcome.name.clone(),
            outcome.result.status.as_colored_str(),
            format!("{:.2?}", outcome.result.duration),
            outcome.result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{}\n{}", table, format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        String::new(),
        "Summary".bold().underline().to_string(),
        format!("  Total checks: {}", report.total()),
        format!("  {} Passed: {}", "✓".green(), report.passed()),
    ];

    if report.warned() > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned()));
    }
    if report.failed() > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed()));
    }

    let overall = match report.status() {
        CheckStatus::Pass => "Overall: HEALTHY".green().bold(),
        CheckStatus::Warn => "Overall: HEALTHY (with warnings)".yellow().bold(),
        CheckStatus::Fail => "Overall: UNHEALTHY".red().bold(),
    };
    lines.push(String::new());
    lines.push(format!("  {}", overall));

    lines.join("\n") + "\n"
}

/// Prints the report, then the details of every check that has them
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for outcome in &report.outcomes {
        if let Some(details) = &outcome.result.details {
            match outcome.description {
                Some(description) => {
                    println!("\n{} ({}):", outcome.name.bold(), description.dimmed())
                }
                None => println!("\n{}:", outcome.name.bold()),
            }
            println!("{}", details);
        }
    }
}
