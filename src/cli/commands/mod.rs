//! Command implementations for the FrameLeague importer CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and output rendering for the CLI interface. Each command is implemented
//! in its own module.

pub mod import;
pub mod inspect;
pub mod scan;
pub mod shared;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the importer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `import`: full pipeline run against a season
/// - `scan`: table file presence report, no parsing
/// - `inspect`: header and record dump of one table file
pub async fn run(args: Args, cancellation: CancellationToken) -> Result<()> {
    match args.get_command() {
        Commands::Import(import_args) => import::run_import(import_args, cancellation).await,
        Commands::Scan(scan_args) => scan::run_scan(scan_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
    }
}
