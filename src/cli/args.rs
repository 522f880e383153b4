//! Command-line argument definitions for the FrameLeague importer
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the FrameLeague legacy importer
///
/// Migrates league data out of the legacy desktop league manager's binary
/// .DB table files into the FrameLeague data store.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "frameleague-importer",
    version,
    about = "Import legacy desktop league manager databases into FrameLeague",
    long_about = "Reads the legacy desktop league manager's proprietary binary table files \
                  (DIVISION.DB, VENUE.DB, TEAM.DB, PLAYER.DB, MATCH.DB, FRAME.DB, DOUBLES.DB) \
                  and imports them into a FrameLeague season. Imports are idempotent: \
                  already-imported entities are recognized by their natural keys and never \
                  duplicated or overwritten."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run a full import from a legacy data directory (main command)
    Import(ImportArgs),
    /// Report which legacy table files a directory contains
    Scan(ScanArgs),
    /// Decode one table file and print its header and records
    Inspect(InspectArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Directory containing the legacy .DB table files
    ///
    /// Scanned recursively; file names are matched case-insensitively, so
    /// copies made on case-mangling filesystems still import.
    #[arg(value_name = "DIR", help = "Directory containing the legacy .DB table files")]
    pub source_dir: PathBuf,

    /// Name for the target season
    ///
    /// Natural-key deduplication is scoped to this season, so importing the
    /// same files under a different season name creates fresh entities.
    #[arg(
        short = 's',
        long = "season",
        value_name = "NAME",
        default_value = "Imported season",
        help = "Name for the target season"
    )]
    pub season: String,

    /// Persist the store after every entity-kind step
    ///
    /// By default the store is persisted once at the end of the run. This
    /// flag trades write amplification for a smaller crash tail.
    #[arg(
        long = "persist-each-step",
        help = "Persist the store after every entity-kind step"
    )]
    pub persist_each_step: bool,

    /// Maximum number of warning messages retained on the summary
    ///
    /// Excess warnings are still counted. Use 0 for unlimited.
    #[arg(
        long = "warn-limit",
        value_name = "COUNT",
        default_value_t = 500,
        help = "Maximum warnings retained on the summary (0 = unlimited)"
    )]
    pub warn_limit: usize,

    /// Output format for the import summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the import summary"
    )]
    pub output_format: OutputFormat,

    /// Disable the step progress bar
    #[arg(long = "no-progress", help = "Disable the step progress bar")]
    pub no_progress: bool,

    /// Also write the JSON summary to a file
    ///
    /// Without a path the summary lands in a timestamped file under the
    /// user data directory.
    #[arg(
        long = "save-summary",
        value_name = "PATH",
        num_args = 0..=1,
        help = "Write the JSON summary to a file (default: user data directory)"
    )]
    pub save_summary: Option<Option<PathBuf>>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final summary. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Directory to scan for legacy table files
    #[arg(value_name = "DIR", help = "Directory to scan for legacy table files")]
    pub source_dir: PathBuf,

    /// Only look at the directory itself, not subdirectories
    #[arg(long = "flat", help = "Do not descend into subdirectories")]
    pub flat: bool,

    /// Output format for the scan report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the scan report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors and the report
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Table file to decode
    #[arg(value_name = "FILE", help = "Table file to decode")]
    pub file: PathBuf,

    /// Maximum number of records to print
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Maximum number of records to print"
    )]
    pub limit: usize,

    /// Print the recovered header only, no records
    #[arg(long = "raw", help = "Print the recovered header only")]
    pub raw: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors and the dump
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

fn validate_source_dir(source_dir: &PathBuf) -> Result<()> {
    if !source_dir.exists() {
        return Err(Error::configuration(format!(
            "Source directory does not exist: {}",
            source_dir.display()
        )));
    }
    if !source_dir.is_dir() {
        return Err(Error::configuration(format!(
            "Source path is not a directory: {}",
            source_dir.display()
        )));
    }
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_source_dir(&self.source_dir)?;

        if self.season.trim().is_empty() {
            return Err(Error::configuration(
                "Season name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured warning cap, with 0 meaning unlimited
    pub fn get_warn_limit(&self) -> Option<usize> {
        (self.warn_limit > 0).then_some(self.warn_limit)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_source_dir(&self.source_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "Table file does not exist: {}",
                self.file.display()
            )));
        }
        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Path is not a file: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}
