//! EZSub Core - Backend logic for E.Z Subtitles
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be used by a GUI application or the CLI tool.
//!
//! The workflow mirrors the two-list window of the desktop app:
//! - Drop videos and subtitles into a [`session::SyncSession`]
//! - Reorder or naturally sort each list
//! - Run [`sync::sync_names`] to rename every subtitle after its paired video

pub mod config;
pub mod files;
pub mod logging;
pub mod models;
pub mod naming;
pub mod platform;
pub mod session;
pub mod sync;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
