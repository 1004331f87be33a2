//! Path helpers and the extension allow-list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MediaKind;

/// Base name of a path: filename without directory and without extension.
///
/// Only the last extension is removed, so `show.en.srt` yields `show.en`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Filename without directory, as shown in a list.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Last extension of a path without the leading dot, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_string())
}

/// Case-insensitive allow-list of file extensions.
///
/// An empty allow-list accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from extensions, with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// Filter accepting the default extensions of a media kind.
    pub fn for_kind(kind: MediaKind) -> Self {
        Self::new(kind.default_extensions().iter().copied())
    }

    /// Filter accepting every file.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Allowed extensions (lowercase, no dot).
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Check whether a path passes the filter.
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match extension_of(path) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}
