use serde::{Deserialize, Serialize};

/// The only state the widget owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub number: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    // Overflow is not handled.
    pub fn increment(&mut self) {
        self.number += 1;
    }

    /// Two-space indented JSON, e.g. `{\n  "number": 3\n}`.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("CounterState always serializes to JSON")
    }
}
