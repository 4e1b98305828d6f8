use std::collections::{BTreeMap, HashSet};

/// Identifier a node writes into the `id:` field of its records.
pub type NodeId = i64;

/// Aggregates collected from one log file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    /// Distinct sink payloads, in first-seen order.
    pub distinct_receives: Vec<String>,
    /// Last power reading reported by each non-sink node.
    pub power_by_node: BTreeMap<NodeId, f64>,
    seen_receives: HashSet<String>,
}

impl ParsedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sink payload unless an identical one was already seen.
    pub fn record_receive(&mut self, payload: &str) {
        if self.seen_receives.insert(payload.to_string()) {
            self.distinct_receives.push(payload.to_string());
        }
    }

    /// Store a power reading, replacing any earlier one for the same node.
    pub fn record_power(&mut self, node_id: NodeId, power: f64) {
        self.power_by_node.insert(node_id, power);
    }

    pub fn receive_count(&self) -> usize {
        self.distinct_receives.len()
    }

    pub fn power_values(&self) -> Vec<f64> {
        self.power_by_node.values().copied().collect()
    }
}

/// Per-file delivery and power statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub file_name: String,
    pub node_count: u32,
    pub receive_count: usize,
    pub success_ratio: f64,
    pub average_power: f64,
    pub power_variance: f64,
    pub power_by_node: BTreeMap<NodeId, f64>,
}
