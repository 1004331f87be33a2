//! Configuration management for E.Z Subtitles.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use ezsub_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(ConfigManager::default_path());
//! config.load_or_create().unwrap();
//!
//! println!("Subtitle types: {:?}", config.settings().extensions.subtitle);
//!
//! config.settings_mut().lists.natural_sort_on_drop = false;
//! config.update_section(ConfigSection::Lists).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult, LoadOutcome};
pub use settings::{
    ConfigSection, ExtensionSettings, ListSettings, LoggingSettings, PathSettings, Settings,
};
