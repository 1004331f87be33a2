//! E.Z Subtitles - command line entry point
//!
//! Handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Dispatch to subcommands

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ezsub_core::config::{ConfigManager, LoadOutcome};
use ezsub_core::logging::{init_tracing, init_tracing_with_file, LogLevel};

mod commands;

use commands::ListArgs;

/// Rename subtitles to match their videos.
#[derive(Parser, Debug)]
#[command(name = "ez-subtitles")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show how videos and subtitles pair up and what a sync would do
    Preview(ListArgs),

    /// Rename every subtitle after its paired video
    Sync {
        #[command(flatten)]
        lists: ListArgs,

        /// Only show what would happen
        #[arg(long)]
        dry_run: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the OS privacy / full disk access settings
    PrivacySettings,

    /// Show the configuration file
    Config {
        /// Write a default configuration if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.unwrap_or_else(ConfigManager::default_path);
    let mut config = ConfigManager::new(&config_path);

    // Only `config --init` writes a file; everything else reads or uses defaults
    let load_result = match cli.command {
        Commands::Config { init: true } => config.load_or_create().map(Some),
        _ if config_path.exists() => config.load().map(|()| Some(LoadOutcome::Loaded)),
        _ => Ok(None),
    };

    let level = cli.log_level.unwrap_or(config.settings().logging.level);
    let _log_guard = if config.settings().logging.log_to_file && config_path.exists() {
        init_tracing_with_file(level, &config.logs_folder())
    } else {
        init_tracing(level);
        None
    };

    // Loading ran before any subscriber existed, so report it now
    match load_result {
        Ok(Some(LoadOutcome::Created)) => {
            tracing::info!("Created default config: {}", config_path.display())
        }
        Ok(Some(LoadOutcome::Rewritten)) => {
            tracing::info!("Rewrote config with defaults: {}", config_path.display())
        }
        Ok(Some(LoadOutcome::Loaded)) => {
            tracing::debug!("Loaded config: {}", config_path.display())
        }
        Ok(None) => tracing::debug!("No config file, using defaults"),
        Err(e) => tracing::warn!("Failed to load config: {}. Using defaults.", e),
    }

    tracing::debug!("Core version: {}", ezsub_core::version());

    match cli.command {
        Commands::Preview(lists) => commands::preview(config.settings(), &lists),
        Commands::Sync {
            lists,
            dry_run,
            json,
        } => commands::sync(config.settings(), &lists, dry_run, json),
        Commands::PrivacySettings => commands::privacy_settings(),
        Commands::Config { .. } => commands::show_config(&config),
    }
}
