//! JSON scenario files

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::memory::InMemoryEventLog;
use crate::core::models::{EventRequest, LoadedSnapshot};

/// One event together with the data it is decided against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// The submitted event
    pub event: EventRequest,

    /// Stored data for the touched hierarchy
    pub snapshot: LoadedSnapshot,

    /// Previously recorded events
    #[serde(default)]
    pub history: InMemoryEventLog,

    /// Frozen "now"; wall-clock time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<DateTime<Utc>>,
}

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read scenario {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid scenario {}", path.display()))
}
