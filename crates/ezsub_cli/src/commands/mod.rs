//! Subcommand implementations.

mod config;
mod pairs;

pub use config::show_config;
pub use pairs::{preview, privacy_settings, sync};

use std::path::PathBuf;

use clap::Args;

/// The two lists, as dropped paths.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Video files or folders (folders are searched recursively)
    #[arg(short, long = "videos", num_args = 1.., required = true)]
    pub videos: Vec<String>,

    /// Subtitle files or folders (folders are searched recursively)
    #[arg(short, long = "subtitles", num_args = 1.., required = true)]
    pub subtitles: Vec<String>,

    /// Keep the given order instead of sorting each list naturally
    #[arg(long)]
    pub no_sort: bool,
}

impl ListArgs {
    /// Paths with `file://` URIs cleaned up.
    pub fn video_paths(&self) -> Vec<PathBuf> {
        clean_all(&self.videos)
    }

    pub fn subtitle_paths(&self) -> Vec<PathBuf> {
        clean_all(&self.subtitles)
    }
}

fn clean_all(items: &[String]) -> Vec<PathBuf> {
    items
        .iter()
        .map(|item| ezsub_core::files::clean_file_url(item))
        .collect()
}
