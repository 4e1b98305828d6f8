//! High-level API for reading sensor log files.

use crate::constants::{HEADER_MARKER, TIME_CUTOFF_SECS};
use crate::error::{Error, Result};
use crate::models::ParsedLog;
use crate::record::{Event, RawRecord};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A reader for one experiment log.
///
/// The reader owns its input; [`SensorLogReader::parse`] consumes it, so a
/// file handle is closed as soon as parsing returns, whichever way it returns.
///
/// # Examples
///
/// ```no_run
/// use staffetta_log_stats::SensorLogReader;
///
/// let parsed = SensorLogReader::from_file("logs/nodes5.txt")?.parse()?;
/// println!("{} distinct packets at the sink", parsed.receive_count());
/// # Ok::<(), staffetta_log_stats::Error>(())
/// ```
pub struct SensorLogReader<R> {
    input: R,
}

impl SensorLogReader<BufReader<File>> {
    /// Open a log file for parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> SensorLogReader<&'a [u8]> {
    /// Parse log text already held in memory.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<R: BufRead> SensorLogReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Scan the log and collect sink receives and node power readings.
    ///
    /// Lines up to and including the first one containing `Sink` are
    /// skipped. Scanning stops at the first record whose time is at or past
    /// the cutoff; later lines are never read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] for a data line that cannot be
    /// decoded, and [`Error::Io`] if reading fails.
    pub fn parse(self) -> Result<ParsedLog> {
        let mut parsed = ParsedLog::new();
        let mut scanning = false;

        for (idx, line) in self.input.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if !scanning {
                if line.contains(HEADER_MARKER) {
                    debug!("Header found on line {}", line_no);
                    scanning = true;
                }
                continue;
            }

            let record = RawRecord::new(&line);

            let seconds = record
                .seconds()
                .map_err(|reason| Error::malformed(line_no, reason))?;
            if seconds >= TIME_CUTOFF_SECS {
                debug!("Cutoff reached at {}s on line {}", seconds, line_no);
                break;
            }

            match record
                .event()
                .map_err(|reason| Error::malformed(line_no, reason))?
            {
                Event::Receive(payload) => parsed.record_receive(payload),
                Event::Power { node_id, power } => parsed.record_power(node_id, power),
                Event::Ignored => trace!("Ignoring line {}", line_no),
            }
        }

        if !scanning {
            debug!("No '{}' header line found", HEADER_MARKER);
        }

        Ok(parsed)
    }
}
