//! Show or initialize the configuration

use std::path::Path;

use levelup::config::GlobalConfig;
use levelup::output::{OperationResult, OutputMode};

/// Print the effective configuration, or write `config` out with `init`
pub fn show_config(
    config: &GlobalConfig,
    explicit: Option<&Path>,
    init: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if init {
        let path = explicit.map_or_else(GlobalConfig::config_path, Path::to_path_buf);
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        config.save(&path)?;
        OperationResult {
            success: true,
            message: format!("Wrote {}", path.display()),
        }
        .render(mode);
        return Ok(());
    }

    match mode {
        OutputMode::Human => print!("{}", config.to_toml()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
