//! Log domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of an action's log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    /// Render as a single `timestamp message` block
    pub fn render(&self) -> String {
        format!(
            "{} {}",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.message.trim_end()
        )
    }
}
