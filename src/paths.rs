//! Centralized path definitions for levelup
//!
//! This module provides a single source of truth for the filesystem paths
//! levelup reads.
//!
//! ## Layout
//!
//! ```text
//! ~/.levelup/
//! └── levelup.toml              # Engine settings (reference time zone, guards)
//! ```
//!
//! The `LEVELUP_CONFIG` environment variable points at another file.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LEVELUP_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".levelup";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "levelup.toml";

/// Get the global levelup directory.
///
/// Returns `~/.levelup/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.levelup/levelup.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `LEVELUP_CONFIG`, if set and non-empty
#[must_use]
pub fn config_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
