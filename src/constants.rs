//! Protocol facts of the experiment logs.

use crate::models::NodeId;

/// Node whose payloads are packets delivered to the sink.
pub const SINK_NODE_ID: NodeId = 1;

/// Substring of the line that precedes the data section of every log.
pub const HEADER_MARKER: &str = "Sink";

/// Records at or past this many seconds end the scan of a file.
pub const TIME_CUTOFF_SECS: f64 = 10.0;

/// Leading payload token that marks a power report.
pub const POWER_EVENT_CODE: u64 = 6;

/// Power values are logged in milli-units.
pub const MILLI_PER_UNIT: f64 = 1000.0;

/// Transmissions each node is expected to make during the observed window.
pub const EXPECTED_PACKETS_PER_NODE: f64 = 10.0;

/// Substring a file name must contain to be picked up by discovery.
pub const LOG_FILE_MARKER: &str = ".txt";
