//! Drag-drop URI cleanup.

use std::path::PathBuf;

use percent_encoding::percent_decode_str;

/// Clean up a file URL (from drag-drop or paste) to a regular path.
///
/// Accepts a plain path or a `text/uri-list` payload; only the first
/// non-empty, non-comment line is used.
pub fn clean_file_url(url: &str) -> PathBuf {
    let first_uri = url
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or("");

    let path = match first_uri.strip_prefix("file://") {
        // file://host/path is not supported; only the empty authority form
        Some(rest) => percent_decode_str(rest).decode_utf8_lossy().to_string(),
        None => first_uri.to_string(),
    };

    PathBuf::from(path.trim())
}
