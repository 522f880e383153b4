use clap::Parser;
use frameleague_importer::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token for coordinating graceful shutdown; the import
        // pipeline checks it between entity-kind steps
        let cancellation_token = CancellationToken::new();

        let command = commands::run(args, cancellation_token.clone());
        tokio::pin!(command);

        tokio::select! {
            result = &mut command => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping at the next step boundary...");
                cancellation_token.cancel();
                // Let the command finish its current step and report
                command.await
            }
        }
    });

    match result {
        Ok(()) => {
            // Success - output has already been rendered by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("FrameLeague Importer - Legacy League Database Migration");
    println!("=======================================================");
    println!();
    println!("Import the legacy desktop league manager's binary .DB table files");
    println!("into a FrameLeague season, with idempotent natural-key deduplication.");
    println!();
    println!("USAGE:");
    println!("    frameleague-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Run a full import from a legacy data directory (main command)");
    println!("    scan        Report which legacy table files a directory contains");
    println!("    inspect     Decode one table file and print its header and records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check what a legacy data directory contains:");
    println!("    frameleague-importer scan /path/to/league/data");
    println!();
    println!("    # Import it into a named season:");
    println!("    frameleague-importer import /path/to/league/data --season \"2002/03\"");
    println!();
    println!("    # Debug one table file's layout:");
    println!("    frameleague-importer inspect /path/to/league/data/TEAM.DB --limit 5");
    println!();
    println!("For detailed help on any command, use:");
    println!("    frameleague-importer <COMMAND> --help");
}
