//! Import command implementation
//!
//! Runs the full pipeline against a fresh in-memory store as a validation
//! import: everything is parsed, resolved, and committed with real store
//! semantics, and the resulting summary is rendered or emitted as JSON.

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared;
use crate::app::adapters::memory_store::MemoryStore;
use crate::app::services::importer::LegacyImporter;
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::config::ImportOptions;
use crate::{Error, Result};

/// Run the import command
pub async fn run_import(args: ImportArgs, cancellation: CancellationToken) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!(
        "Importing legacy data from {} into season '{}'",
        args.source_dir.display(),
        args.season
    );

    let options = ImportOptions::default()
        .with_persist_each_step(args.persist_each_step)
        .with_warn_limit(args.get_warn_limit());
    options.validate()?;

    let mut store = MemoryStore::new();
    let season = store.create_season(&args.season);

    let importer = LegacyImporter::new(&args.source_dir)
        .with_options(options)
        .with_cancellation(cancellation);

    let progress_bar = args
        .show_progress()
        .then(|| shared::create_progress_bar(7, "Starting import"));
    let mut sink = |step_name: &str, step_index: usize, _step_count: usize| {
        if let Some(bar) = &progress_bar {
            bar.set_position(step_index as u64 - 1);
            bar.set_message(step_name.to_string());
        }
    };

    let summary = importer.run(&mut store, season, &mut sink).await;

    if let Some(bar) = &progress_bar {
        bar.finish_and_clear();
    }

    match args.output_format {
        OutputFormat::Human => shared::render_summary(&summary),
        OutputFormat::Json => println!("{}", shared::to_json(&summary)?),
    }

    if let Some(requested) = &args.save_summary {
        let written = shared::save_summary_file(&summary, requested.as_deref())?;
        info!("Summary saved to {}", written.display());
    }

    if summary.success {
        Ok(())
    } else {
        Err(Error::import_failed(summary.errors.len()))
    }
}
