//! Command-line interface for the Staffetta log statistics.
//!
//! Walks the current directory for `.txt` logs and prints one summary block
//! per file to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use staffetta_log_stats::{discover_log_files, SensorLogReader, Summary};
use std::path::Path;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarise packet delivery and power from Staffetta sensor logs",
    long_about = "Recursively finds every file under the current directory whose name contains \
                  '.txt', parses the first 10 seconds of each log and prints the sink's distinct \
                  receive count, delivery ratio and per-node power statistics."
)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn summarize_one_file(path: &Path) -> Result<Summary> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name", path.display()))?;

    let parsed = SensorLogReader::from_file(path)
        .and_then(|reader| reader.parse())
        .with_context(|| format!("failed to parse {}", path.display()))?;

    info!(
        "{}: {} distinct receive(s), {} node(s) with power",
        file_name,
        parsed.receive_count(),
        parsed.power_by_node.len()
    );

    Summary::from_parsed(&file_name, parsed)
        .with_context(|| format!("failed to summarise {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let log_files = discover_log_files(".")?;

    if log_files.is_empty() {
        info!("No .txt files found under the current directory");
        return Ok(());
    }
    info!("Found {} log file(s)", log_files.len());

    let total_start = Instant::now();
    let mut failed = 0usize;

    for path in &log_files {
        match summarize_one_file(path) {
            Ok(summary) => println!("{}", summary),
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    info!(
        "Processed {} file(s), {} failed, in {:.2?}",
        log_files.len(),
        failed,
        total_start.elapsed()
    );

    Ok(())
}
