//! Engine configuration
//!
//! Settings are read from a TOML file. Lookup order: an explicit path, the
//! `LEVELUP_CONFIG` environment variable, then `~/.levelup/levelup.toml`.
//! Without a file every setting takes its default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::paths;

/// Largest accepted reference zone offset, in minutes
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Top-level levelup configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Engine settings as written in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Offset from UTC, in minutes, of the zone daily buckets are cut in
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Refuse events on skills that already hold their total points
    #[serde(default = "default_enforce_max_points")]
    pub enforce_max_points: bool,
}

const fn default_enforce_max_points() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            enforce_max_points: default_enforce_max_points(),
        }
    }
}

/// Validated settings the engine runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Reference zone for daily buckets
    pub zone: FixedOffset,
    /// Whether the max-points guard is active
    pub enforce_max_points: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            zone: Utc.fix(),
            enforce_max_points: default_enforce_max_points(),
        }
    }
}

impl EngineConfig {
    /// Validate into engine settings
    pub fn settings(&self) -> Result<EngineSettings, EngineError> {
        let minutes = self.utc_offset_minutes;
        let zone = if minutes.abs() <= MAX_OFFSET_MINUTES {
            FixedOffset::east_opt(minutes * 60)
        } else {
            None
        };
        let zone = zone.ok_or_else(|| {
            EngineError::configuration(format!("utc_offset_minutes {minutes} is out of range"))
        })?;

        Ok(EngineSettings {
            zone,
            enforce_max_points: self.enforce_max_points,
        })
    }
}

impl GlobalConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_from_env().unwrap_or_else(paths::global_config)
    }

    /// Load config from `explicit`, or from the default location
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.engine.settings()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
