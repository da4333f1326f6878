//! Console output for humans
//!
//! Diagnostics go through `tracing`; this module prints the parts of a run
//! meant to be read in the CI console: step log lines and the final summary.

use colored::*;
use relay_core::domain::log::LogEntry;
use relay_core::outcome::AggregateResult;
use std::path::Path;

/// Print the first log line of a step action
pub fn print_step_log(job: &str, step: &str, entry: &LogEntry) {
    println!(
        "{} {} {}",
        format!("[{}]", job).cyan(),
        format!("{}:", step).bold(),
        entry.render()
    );
}

/// Print the artifact map and overall result
pub fn print_summary(result: &AggregateResult, artifacts_path: &Path) {
    println!();
    println!("{}", "─".repeat(80).dimmed());

    let artifacts = result.artifacts();
    if artifacts.is_empty() {
        println!("{}", "No artifacts collected.".yellow());
    } else {
        println!(
            "{}",
            format!("Collected {} artifact(s):", artifacts.len()).bold()
        );
        for (path, url) in artifacts.iter() {
            println!("  {} {}", path.cyan(), url.dimmed());
        }
    }
    println!(
        "  Written to {}",
        artifacts_path.display().to_string().dimmed()
    );

    println!("{}", "─".repeat(80).dimmed());
    if result.failed() {
        println!("{}", "✗ Pipeline failed".red().bold());
    } else {
        println!("{}", "✓ Pipeline succeeded".green().bold());
    }
}
