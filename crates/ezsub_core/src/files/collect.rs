//! Expansion of dropped files and folders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ExtensionFilter;
use crate::naming::sort_paths_naturally;

/// Reasons a dropped path (or part of it) could not be collected.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to resolve path {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A path that was skipped during collection.
#[derive(Debug)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: CollectError,
}

/// Result of expanding a drop.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    /// Accepted files, in drop order (folder contents in natural order).
    pub files: Vec<PathBuf>,
    /// Files rejected by the extension filter.
    pub filtered: usize,
    /// Paths that could not be read.
    pub skipped: Vec<SkippedPath>,
}

impl CollectOutcome {
    fn skip(&mut self, path: &Path, reason: CollectError) {
        tracing::warn!("Skipping dropped path: {}", reason);
        self.skipped.push(SkippedPath {
            path: path.to_path_buf(),
            reason,
        });
    }

    fn offer(&mut self, path: PathBuf, filter: &ExtensionFilter) {
        if filter.matches(&path) {
            self.files.push(path);
        } else {
            tracing::trace!("Filtered out: {}", path.display());
            self.filtered += 1;
        }
    }
}

/// Expand dropped items into a flat list of files.
///
/// Files are kept when they pass `filter`. Folders are walked recursively;
/// symlinked folders found inside a walk are not followed. Missing paths and
/// unreadable folders are recorded in `skipped` and never abort the drop.
pub fn collect_dropped<I, P>(items: I, filter: &ExtensionFilter) -> CollectOutcome
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut outcome = CollectOutcome::default();

    for item in items {
        let item = item.as_ref();
        let path = match std::path::absolute(item) {
            Ok(p) => p,
            Err(source) => {
                outcome.skip(
                    item,
                    CollectError::Resolve {
                        path: item.to_path_buf(),
                        source,
                    },
                );
                continue;
            }
        };

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => walk_dir(&path, filter, &mut outcome),
            Ok(_) => outcome.offer(path, filter),
            Err(_) => outcome.skip(&path, CollectError::NotFound(path.clone())),
        }
    }

    tracing::debug!(
        "Collected {} files ({} filtered, {} skipped)",
        outcome.files.len(),
        outcome.filtered,
        outcome.skipped.len()
    );

    outcome
}

/// Recursively collect files under a directory.
fn walk_dir(dir: &Path, filter: &ExtensionFilter, outcome: &mut CollectOutcome) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            outcome.skip(
                dir,
                CollectError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                },
            );
            return;
        }
    };

    let mut children: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    sort_paths_naturally(&mut children);

    for child in children {
        let meta = match fs::symlink_metadata(&child) {
            Ok(meta) => meta,
            Err(_) => {
                outcome.skip(&child, CollectError::NotFound(child.clone()));
                continue;
            }
        };

        if meta.is_dir() {
            walk_dir(&child, filter, outcome);
        } else if meta.file_type().is_symlink() {
            // Symlinks to files are kept; symlinked folders are not followed
            if child.is_file() {
                outcome.offer(child, filter);
            }
        } else {
            outcome.offer(child, filter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{display_name, MediaKind};
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn folder_drop_expands_recursively_with_filter() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("season/ep10.srt"));
        touch(&dir.path().join("season/ep2.srt"));
        touch(&dir.path().join("season/extras/ep1.ass"));
        touch(&dir.path().join("season/notes.txt"));

        let filter = ExtensionFilter::for_kind(MediaKind::Subtitle);
        let outcome = collect_dropped([dir.path().join("season")], &filter);

        let names: Vec<String> = outcome.files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["ep2.srt", "ep10.srt", "ep1.ass"]);
        assert_eq!(outcome.filtered, 1);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn file_drop_respects_filter() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("movie.mkv");
        let other = dir.path().join("movie.avi");
        touch(&video);
        touch(&other);

        let filter = ExtensionFilter::for_kind(MediaKind::Video);
        let outcome = collect_dropped([&video, &other], &filter);
        assert_eq!(outcome.files, vec![video]);
        assert_eq!(outcome.filtered, 1);
    }

    #[test]
    fn missing_path_is_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("ep1.srt");
        touch(&real);

        let filter = ExtensionFilter::accept_all();
        let outcome = collect_dropped([dir.path().join("gone.srt"), real.clone()], &filter);
        assert_eq!(outcome.files, vec![real]);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(outcome.skipped[0].reason, CollectError::NotFound(_)));
    }

    #[test]
    fn collected_paths_are_absolute() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.srt"));
        let outcome = collect_dropped([dir.path()], &ExtensionFilter::accept_all());
        assert!(outcome.files.iter().all(|p| p.is_absolute()));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_not_followed() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("real/ep1.srt"));
        fs::create_dir_all(dir.path().join("drop")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("drop/link")).unwrap();
        touch(&dir.path().join("drop/ep2.srt"));

        let outcome = collect_dropped([dir.path().join("drop")], &ExtensionFilter::accept_all());
        let names: Vec<String> = outcome.files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["ep2.srt"]);
    }
}
