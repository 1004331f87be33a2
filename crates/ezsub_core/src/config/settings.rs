//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::{ExtensionFilter, MediaKind};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Accepted file types per list.
    #[serde(default)]
    pub extensions: ExtensionSettings,

    /// List behaviour.
    #[serde(default)]
    pub lists: ListSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Extension allow-lists (lowercase, no dot). Empty accepts every file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionSettings {
    #[serde(default = "default_video_extensions")]
    pub video: Vec<String>,

    #[serde(default = "default_subtitle_extensions")]
    pub subtitle: Vec<String>,
}

fn default_video_extensions() -> Vec<String> {
    to_strings(MediaKind::Video.default_extensions())
}

fn default_subtitle_extensions() -> Vec<String> {
    to_strings(MediaKind::Subtitle.default_extensions())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            video: default_video_extensions(),
            subtitle: default_subtitle_extensions(),
        }
    }
}

impl ExtensionSettings {
    /// Build the filter for a list.
    pub fn filter_for(&self, kind: MediaKind) -> ExtensionFilter {
        match kind {
            MediaKind::Video => ExtensionFilter::new(&self.video),
            MediaKind::Subtitle => ExtensionFilter::new(&self.subtitle),
        }
    }
}

/// List behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    /// Ignore files that are already in the list when dropped again.
    #[serde(default = "default_true")]
    pub skip_duplicates: bool,

    /// Sort a list naturally after every drop.
    #[serde(default = "default_true")]
    pub natural_sort_on_drop: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            skip_duplicates: true,
            natural_sort_on_drop: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to the logs folder.
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: true,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Extensions,
    Lists,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Extensions,
        ConfigSection::Lists,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Extensions => "extensions",
            ConfigSection::Lists => "lists",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "Working directories",
            ConfigSection::Extensions => "Accepted file types (lowercase, no dot; empty accepts all)",
            ConfigSection::Lists => "File list behaviour",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}
