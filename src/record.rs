//! Field-level parsing of tab-delimited data lines.
//!
//! A data line looks like `sec:<float>\tid:<int>\t<payload>`. The fields are
//! decoded lazily so the time cutoff can be checked before anything else on
//! the line is looked at.

use crate::constants::{MILLI_PER_UNIT, POWER_EVENT_CODE, SINK_NODE_ID};
use crate::models::NodeId;

/// What a data line contributes to the per-file aggregates.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<'a> {
    /// Payload logged by the sink, kept verbatim.
    Receive(&'a str),
    /// Power report from a non-sink node, already converted from milli-units.
    Power { node_id: NodeId, power: f64 },
    /// Any other event code, or a payload without a numeric code.
    Ignored,
}

/// Tab-separated fields of one data line.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            fields: line.split('\t').collect(),
        }
    }

    /// Elapsed seconds from field 0 (`sec:<float>`).
    pub fn seconds(&self) -> Result<f64, String> {
        let value = tagged_value(self.field(0)?, "seconds")?;
        value
            .parse::<f64>()
            .map_err(|e| format!("invalid seconds value '{}': {}", value, e))
    }

    /// Reporting node from field 1 (`id:<int>`).
    pub fn node_id(&self) -> Result<NodeId, String> {
        let value = tagged_value(self.field(1)?, "node id")?;
        value
            .parse::<NodeId>()
            .map_err(|e| format!("invalid node id '{}': {}", value, e))
    }

    /// Field 2, untouched.
    pub fn payload(&self) -> Result<&'a str, String> {
        self.field(2)
    }

    /// Classify the line by its reporting node and payload.
    pub fn event(&self) -> Result<Event<'a>, String> {
        let node_id = self.node_id()?;
        let payload = self.payload()?;

        if node_id == SINK_NODE_ID {
            return Ok(Event::Receive(payload));
        }
        node_event(node_id, payload)
    }

    fn field(&self, index: usize) -> Result<&'a str, String> {
        self.fields.get(index).copied().ok_or_else(|| {
            format!(
                "expected at least {} tab-separated fields, found {}",
                index + 1,
                self.fields.len()
            )
        })
    }
}

/// Decode a non-sink payload: `<code> <value> ...`.
pub fn node_event(node_id: NodeId, payload: &str) -> Result<Event<'_>, String> {
    let mut tokens = payload.trim().split(' ');
    let code = tokens.next().unwrap_or_default();

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Event::Ignored);
    }

    // All digits, so a parse failure can only be overflow, which is not 6.
    if code.parse::<u64>().ok() != Some(POWER_EVENT_CODE) {
        return Ok(Event::Ignored);
    }

    let raw = tokens
        .next()
        .ok_or_else(|| "power event without a value".to_string())?;
    let milli = raw
        .parse::<f64>()
        .map_err(|e| format!("invalid power value '{}': {}", raw, e))?;

    Ok(Event::Power {
        node_id,
        power: milli / MILLI_PER_UNIT,
    })
}

fn tagged_value<'a>(field: &'a str, what: &str) -> Result<&'a str, String> {
    field
        .split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| format!("{} field '{}' has no ':' separator", what, field))
}
