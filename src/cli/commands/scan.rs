//! Scan command implementation
//!
//! Reports which expected legacy table files a directory contains, with
//! sizes, without parsing any file content.

use tracing::info;

use super::shared;
use crate::app::services::source_scanner::scan_source_dir;
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::config::ScanOptions;
use crate::Result;

/// Run the scan command
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!("Scanning {} for legacy table files", args.source_dir.display());

    let options = ScanOptions::default().with_recursive(!args.flat);
    let report = scan_source_dir(&args.source_dir, &options)?;

    match args.output_format {
        OutputFormat::Human => shared::render_scan_report(&report),
        OutputFormat::Json => println!("{}", shared::to_json(&report)?),
    }

    Ok(())
}
