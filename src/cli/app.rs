//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use levelup::config::GlobalConfig;
use levelup::output::OutputMode;

/// levelup - Turn skill events into points and level-ups
#[derive(Parser, Debug)]
#[command(
    name = "levelup",
    version,
    about = "Turn skill events into points and level-ups",
    long_about = "Replay \"skill performed\" events against a stored snapshot.\n\n\
                  Shows whether an event counts, which point records it creates,\n\
                  and which subject and project levels it unlocks."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $LEVELUP_CONFIG, then ~/.levelup/levelup.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process one event from a scenario file
    Process {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },

    /// Check only whether the scenario's event passes the dedup window
    Gate {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },

    /// Print a dedup interval the way rejection messages show it
    Interval {
        /// Interval in minutes
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Show the effective configuration
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Process { scenario }) => {
            let config = GlobalConfig::load(config_path)?;
            commands::process(&scenario, &config, output_mode)
        },
        Some(Command::Gate { scenario }) => commands::gate(&scenario, output_mode),
        Some(Command::Interval { minutes }) => commands::interval(minutes, output_mode),
        Some(Command::Config { init: true }) => {
            commands::show_config(&GlobalConfig::default(), config_path, true, output_mode)
        },
        Some(Command::Config { init: false }) => {
            let config = GlobalConfig::load(config_path)?;
            commands::show_config(&config, config_path, false, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("levelup v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("levelup v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'levelup --help' for usage");
                println!("Run 'levelup process <scenario.json>' to replay an event");
            }
            Ok(())
        },
    }
}
