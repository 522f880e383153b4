//! Shared components for CLI commands
//!
//! Logging setup, progress bar construction, and the human renderers for
//! summaries and scan reports used across the command implementations.

use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::importer::ImportSummary;
use crate::app::services::source_scanner::ScanReport;
use crate::{Error, Result};

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("frameleague_importer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a step progress bar with the standard styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Serialize a value as pretty JSON for `--format json` output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::configuration(format!("Failed to encode JSON output: {}", e)))
}

/// Resolve a summary file location in the user data directory using
/// standard directory conventions
fn default_summary_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine user data directory")?;

    let summary_dir = data_dir.join("frameleague-importer");
    std::fs::create_dir_all(&summary_dir)
        .with_context(|| format!("Failed to create {}", summary_dir.display()))?;

    let file_name = format!(
        "import-summary-{}.json",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    Ok(summary_dir.join(file_name))
}

/// Write the JSON summary to `path`, or to a timestamped file in the user
/// data directory when no path was given. Returns where it was written.
pub fn save_summary_file(summary: &ImportSummary, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_summary_path()
            .map_err(|e| Error::configuration(format!("{:#}", e)))?,
    };

    std::fs::write(&path, to_json(summary)?)
        .map_err(|e| Error::io(format!("Failed to write summary to {}", path.display()), e))?;
    debug!("Wrote import summary to {}", path.display());
    Ok(path)
}

/// Format a byte count in human-readable units
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Render an import summary for terminal display
pub fn render_summary(summary: &ImportSummary) {
    println!();
    println!("{}", "Import Summary".bold());
    println!("{}", "==============".bold());
    println!("Source: {}", summary.source_dir.display());
    println!();
    println!(
        "{:<16} {:>10} {:>12} {:>10} {:>14}",
        "Entity", "Imported", "Duplicates", "Orphaned", "Placeholders"
    );
    for (kind, counts) in &summary.counts {
        println!(
            "{:<16} {:>10} {:>12} {:>10} {:>14}",
            kind.step_name(),
            counts.imported,
            counts.duplicates,
            counts.orphaned,
            counts.placeholders_skipped
        );
    }
    println!();

    if let (Some(start), Some(end)) = (summary.earliest_date, summary.latest_date) {
        println!("Match dates: {} to {}", start, end);
    }

    if !summary.warnings.is_empty() || summary.warnings_truncated > 0 {
        println!("{}", format!("Warnings ({}):", summary.warning_count()).yellow());
        for warning in &summary.warnings {
            println!("  {}", warning.yellow());
        }
        if summary.warnings_truncated > 0 {
            println!(
                "  {}",
                format!("... and {} more", summary.warnings_truncated).yellow()
            );
        }
    }

    if !summary.errors.is_empty() {
        println!("{}", format!("Errors ({}):", summary.errors.len()).red());
        for error in &summary.errors {
            println!("  {}", error.red());
        }
    }

    if summary.cancelled {
        println!("{}", "Run was cancelled before completing every step".yellow());
    }

    if summary.success {
        println!(
            "{}",
            format!("Import complete: {} entities imported", summary.total_imported()).green()
        );
    } else {
        println!("{}", "Import finished with errors".red());
    }
}

/// Render a scan report for terminal display
pub fn render_scan_report(report: &ScanReport) {
    println!();
    println!("{}", "Legacy Table Files".bold());
    println!("{}", "==================".bold());
    println!("Directory: {}", report.source_dir.display());
    println!();
    for table in &report.tables {
        match (&table.path, table.size_bytes) {
            (Some(path), size) => {
                let size_label = size.map_or_else(String::new, |s| format!(" ({})", format_size(s)));
                println!(
                    "  {} {:<14} {}{}",
                    "found".green(),
                    table.file_name,
                    path.display(),
                    size_label
                );
            }
            (None, _) => {
                println!("  {} {}", "absent".red(), table.file_name);
            }
        }
    }
    println!();
    println!(
        "{} of {} expected files present",
        report.present_count(),
        report.tables.len()
    );
    if !report.is_importable() {
        println!("{}", "Nothing to import from this directory".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1048576), "1.00 MB");
        assert_eq!(format_size(1073741824), "1.00 GB");
    }

    #[test]
    fn test_save_summary_file_to_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let summary = ImportSummary::new(Path::new("/data/legacy"), None);
        let target = dir.path().join("summary.json");

        let written = save_summary_file(&summary, Some(&target)).unwrap();

        assert_eq!(written, target);
        let text = std::fs::read_to_string(&target).unwrap();
        assert!(text.contains("\"success\""));
        assert!(text.contains("\"counts\""));
    }

    #[test]
    fn test_to_json_is_pretty() {
        #[derive(Serialize)]
        struct Sample {
            name: &'static str,
        }
        let json = to_json(&Sample { name: "Premier" }).unwrap();
        assert!(json.contains("\"name\": \"Premier\""));
    }
}
