/// Test utilities for building sensor log text
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for creating sensor log test files
pub struct LogBuilder {
    text: String,
}

impl LogBuilder {
    /// Create a new builder with a typical preamble ending in the `Sink` header
    pub fn new() -> Self {
        Self::empty()
            .line("Contiki 2.7 started")
            .line("Sink active")
    }

    /// Create a builder without any preamble or header
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a raw line
    pub fn line(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Append a `sec:<s>\tid:<node>\t<payload>` record
    pub fn record(self, seconds: f64, node_id: i64, payload: &str) -> Self {
        let line = format!("sec:{}\tid:{}\t{}", seconds, node_id, payload);
        self.line(&line)
    }

    /// Append a packet received by the sink
    pub fn receive(self, seconds: f64, payload: &str) -> Self {
        self.record(seconds, 1, payload)
    }

    /// Append a power report in milli-units
    pub fn power(self, seconds: f64, node_id: i64, milli: u32) -> Self {
        let payload = format!("6 {} 0", milli);
        self.record(seconds, node_id, &payload)
    }

    /// Build the log text
    pub fn build(self) -> String {
        self.text
    }

    /// Write the log text to `dir/name` and return the path
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.text).unwrap();
        path
    }
}

/// Create an empty file, including parent directories
pub fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "").unwrap();
    path
}
