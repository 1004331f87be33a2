//! `config` subcommand.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};

use ezsub_core::config::ConfigManager;

/// Print the config path and its contents (or the defaults).
pub fn show_config(config: &ConfigManager) -> Result<ExitCode> {
    println!("# {}", config.path().display());

    if config.path().exists() {
        let content = fs::read_to_string(config.path())
            .with_context(|| format!("Failed to read {}", config.path().display()))?;
        print!("{}", content);
    } else {
        println!("# (not created yet; run `ez-subtitles config --init`)");
    }

    Ok(ExitCode::SUCCESS)
}
