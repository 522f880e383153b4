//! Inspect command implementation
//!
//! Decodes one table file and dumps its header and leading records, for
//! debugging source files whose layout deviates from the usual samples.

use colored::Colorize;
use tracing::info;

use super::shared;
use crate::app::services::table_reader::TableFile;
use crate::cli::args::InspectArgs;
use crate::Result;

/// Run the inspect command
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!("Inspecting table file {}", args.file.display());

    let table = TableFile::open(&args.file).await?;
    let header = table.header();

    println!();
    println!("{}", format!("Table file: {}", args.file.display()).bold());
    if let Some(table_name) = &header.table_name {
        println!("Recovered table name: {}", table_name);
    }
    println!("Record size:  {} bytes", header.record_size);
    println!("Record count: {}", header.record_count);
    println!("Field count:  {}", header.field_count);
    println!();
    println!("{:<4} {:<30} {:<14} {:>5}", "#", "Name", "Type", "Bytes");
    for index in 0..header.field_count as usize {
        let name = header
            .field_names
            .get(index)
            .map_or("?", String::as_str);
        let type_label = header
            .field_types
            .get(index)
            .map_or_else(|| "missing".to_string(), |t| t.to_string());
        let size = header
            .field_sizes
            .get(index)
            .map_or_else(|| "?".to_string(), |s| s.to_string());
        println!("{:<4} {:<30} {:<14} {:>5}", index + 1, name, type_label, size);
    }

    if args.raw {
        return Ok(());
    }

    println!();
    for (index, record) in table.records().take(args.limit).enumerate() {
        println!("{}", format!("Record {}", index + 1).bold());
        if record.is_empty() {
            println!("  {}", "(all fields unset)".dimmed());
            continue;
        }
        for (name, value) in record.iter() {
            println!("  {} = {}", name, value);
        }
    }

    let shown = (table.header().record_count as usize).min(args.limit);
    if (table.header().record_count as usize) > shown {
        println!();
        println!(
            "{}",
            format!(
                "... {} more records not shown (raise --limit to see them)",
                table.header().record_count as usize - shown
            )
            .dimmed()
        );
    }

    Ok(())
}
