//! Summarise a single log file given on the command line.

use staffetta_log_stats::{SensorLogReader, Summary};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: summarize_file <log.txt>")?;
    let path = Path::new(&path);

    // Parse the log
    let parsed = SensorLogReader::from_file(path)?.parse()?;

    println!("Distinct receives: {}", parsed.receive_count());
    println!("Nodes reporting power: {}", parsed.power_by_node.len());

    // The node count comes from the file name, e.g. nodes12.txt
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let summary = Summary::from_parsed(&file_name, parsed)?;

    print!("{}", summary);

    Ok(())
}
