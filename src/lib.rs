//! # Staffetta log statistics
//!
//! Parses the tab-delimited serial logs captured during a Staffetta
//! data-collection run and summarises, per log file, how many distinct
//! packets reached the sink and what power the other nodes reported.
//!
//! ## Log format
//!
//! Everything up to and including the first line containing `Sink` is
//! preamble. After it, each line is a record:
//!
//! ```text
//! sec:<seconds>\tid:<node>\t<payload>
//! ```
//!
//! - Payloads logged by the sink (node 1) are delivered packets.
//! - Other nodes log `<code> <value> ...`; code `6` is a power reading in
//!   milli-units.
//! - Only the first 10 seconds are analysed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use staffetta_log_stats::{discover_log_files, SensorLogReader, Summary};
//!
//! for path in discover_log_files(".")? {
//!     let name = path.file_name().unwrap().to_string_lossy().into_owned();
//!     let parsed = SensorLogReader::from_file(&path)?.parse()?;
//!     println!("{}", Summary::from_parsed(&name, parsed)?);
//! }
//! # Ok::<(), staffetta_log_stats::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use staffetta_log_stats::{Error, SensorLogReader};
//!
//! match SensorLogReader::from_file("nodes5.txt").and_then(|r| r.parse()) {
//!     Ok(parsed) => println!("{} receives", parsed.receive_count()),
//!     Err(Error::MalformedRecord { line, reason }) => {
//!         eprintln!("line {}: {}", line, reason);
//!     }
//!     Err(err) => eprintln!("Error: {}", err),
//! }
//! ```

pub mod constants;
pub mod discovery;
pub mod error;
pub mod models;
pub mod reader;
pub mod record;
pub mod report;
pub mod stats;

pub use discovery::discover_log_files;
pub use error::{Error, Result};
pub use models::{NodeId, ParsedLog, Summary};
pub use reader::SensorLogReader;
pub use report::{node_count_from_file_name, success_ratio};
pub use stats::{average, variance};
