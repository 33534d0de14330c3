//! UI helpers for console output.
//!
//! Operator-facing narration lives here; diagnostics go through `tracing`.

use colored::Colorize;

use crate::upload::TaskFailure;

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", title.cyan().bold());
    println!("{}", "═".repeat(60).bright_black());
    println!();
}

/// Print a step indicator with message.
pub fn print_step(message: &str) {
    println!("{} {}", "▶".cyan(), message.bold());
}

/// Print a per-item progress line.
pub fn print_progress(message: &str) {
    println!("  {} {}", "→".cyan(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print a command that a dry run would have executed.
pub fn print_dry_run(command_line: &str) {
    print_dry_run_note(&format!("Would execute: {command_line}"));
}

/// Print a dry-run note.
pub fn print_dry_run_note(message: &str) {
    println!("{} {}", "[Dry Run]".magenta().bold(), message);
}

/// Print every failed task with its error.
pub fn print_failures(failures: &[TaskFailure]) {
    print_error(&format!("{} task(s) failed to process:", failures.len()));
    for failure in failures {
        let title = failure.title.bold();
        eprintln!("  {} {title}: {}", "-".red(), failure.error);
    }
}
