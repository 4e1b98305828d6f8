//! Per-file summary: node count, delivery ratio and power statistics.

use crate::constants::EXPECTED_PACKETS_PER_NODE;
use crate::error::{Error, Result};
use crate::models::{ParsedLog, Summary};
use crate::stats::{average, variance};
use std::fmt;

/// Node count encoded at the end of a log file's label.
///
/// The label is the file name up to its first `.`. It must end in an ASCII
/// digit. When the character before that digit is also a digit, the last two
/// characters are the count (`nodes05.txt` → 5, `nodes12.txt` → 12);
/// otherwise the last character alone is (`nodes5.txt` → 5).
///
/// # Errors
///
/// Returns [`Error::InvalidFileName`] when the label has no trailing digit or
/// encodes a count of zero.
pub fn node_count_from_file_name(file_name: &str) -> Result<u32> {
    let label = file_name.split('.').next().unwrap_or_default();

    let mut tail = label.chars().rev();
    let last = tail
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| Error::invalid_file_name(file_name, "label does not end in a digit"))?;

    let count = match tail.next().and_then(|c| c.to_digit(10)) {
        Some(tens) => tens * 10 + last,
        None => last,
    };

    if count == 0 {
        return Err(Error::invalid_file_name(file_name, "node count is zero"));
    }
    Ok(count)
}

impl Summary {
    /// Derive the summary of a parsed log named `file_name`.
    ///
    /// # Errors
    ///
    /// Fails if the file name carries no node count or no node reported a
    /// power reading.
    pub fn from_parsed(file_name: &str, parsed: ParsedLog) -> Result<Self> {
        let node_count = node_count_from_file_name(file_name)?;
        let receive_count = parsed.receive_count();
        let powers = parsed.power_values();

        Ok(Self {
            file_name: file_name.to_string(),
            node_count,
            receive_count,
            success_ratio: success_ratio(receive_count, node_count),
            average_power: average(&powers)?,
            power_variance: variance(&powers)?,
            power_by_node: parsed.power_by_node,
        })
    }
}

/// Distinct receives over the packets the nodes were expected to send.
pub fn success_ratio(receive_count: usize, node_count: u32) -> f64 {
    receive_count as f64 / (f64::from(node_count) * EXPECTED_PACKETS_PER_NODE)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file: {}", self.file_name)?;
        writeln!(f, "count: {}", self.receive_count)?;
        writeln!(f, "success: {:?}", self.success_ratio)?;
        writeln!(f, "avg power: {:?}", self.average_power)?;
        writeln!(f, "var power: {:?}", self.power_variance)?;

        write!(f, "power: {{")?;
        for (i, (node_id, power)) in self.power_by_node.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", node_id, power)?;
        }
        writeln!(f, "}}")
    }
}
