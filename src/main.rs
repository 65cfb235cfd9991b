use clap::Parser;
use coinvend::application::engine::VendingEngine;
use coinvend::infrastructure::console::ConsoleDispenser;
use coinvend::interfaces::csv::event_reader::EventReader;
use coinvend::interfaces::json::snapshot_writer::SnapshotWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine script CSV file
    input: PathBuf,

    /// Print the final machine state as JSON after replaying the script
    #[arg(long)]
    summary: bool,

    /// Log every accepted operation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut engine = VendingEngine::new(ConsoleDispenser::stdout());

    // Replay events
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = engine.process_event(event) {
                    eprintln!("Error processing event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    if cli.summary {
        let stdout = io::stdout();
        let mut writer = SnapshotWriter::new(stdout.lock());
        writer
            .write_snapshot(&engine.into_snapshot())
            .into_diagnostic()?;
    }

    Ok(())
}
