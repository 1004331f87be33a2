//! Outcome of a synchronization run.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

/// A subtitle that was renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedFile {
    pub index: usize,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A rename the OS refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRename {
    pub index: usize,
    /// Original subtitle path.
    pub path: PathBuf,
    /// OS error text.
    pub error: String,
}

/// Counts and offending names from one sync.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Successful renames.
    pub renamed: Vec<RenamedFile>,
    /// Target filenames that already existed (skipped).
    pub duplicates: Vec<String>,
    /// Renames that failed at the OS level.
    pub failed: Vec<FailedRename>,
    /// When the run finished.
    pub finished_at: DateTime<Local>,
}

impl Default for SyncReport {
    fn default() -> Self {
        Self {
            renamed: Vec::new(),
            duplicates: Vec::new(),
            failed: Vec::new(),
            finished_at: Local::now(),
        }
    }
}

impl SyncReport {
    pub fn success_count(&self) -> usize {
        self.renamed.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Number of pairs processed.
    pub fn total(&self) -> usize {
        self.renamed.len() + self.duplicates.len() + self.failed.len()
    }

    /// True when nothing was skipped or failed.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.failed.is_empty()
    }

    /// Multi-line summary for the user, listing every offending name.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("{} file(s) renamed.", self.success_count())];

        if !self.duplicates.is_empty() {
            lines.push("These names already exist and were not changed:".to_string());
            lines.extend(self.duplicates.iter().map(|name| format!("  {}", name)));
        }

        if !self.failed.is_empty() {
            lines.push("Renaming failed for these files:".to_string());
            lines.extend(
                self.failed
                    .iter()
                    .map(|f| format!("  {} ({})", f.path.display(), f.error)),
            );
        }

        lines.join("\n")
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_offenders() {
        let report = SyncReport {
            renamed: vec![RenamedFile {
                index: 0,
                from: PathBuf::from("/s/1.srt"),
                to: PathBuf::from("/s/a.srt"),
            }],
            duplicates: vec!["b.srt".to_string()],
            failed: vec![FailedRename {
                index: 2,
                path: PathBuf::from("/s/3.srt"),
                error: "Permission denied".to_string(),
            }],
            ..SyncReport::default()
        };

        let summary = report.summary();
        assert!(summary.starts_with("1 file(s) renamed."));
        assert!(summary.contains("  b.srt"));
        assert!(summary.contains("/s/3.srt (Permission denied)"));
        assert_eq!(report.total(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn clean_report_has_single_line() {
        let report = SyncReport::default();
        assert!(report.is_clean());
        assert_eq!(report.to_string(), "0 file(s) renamed.");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = SyncReport {
            duplicates: vec!["x.srt".to_string()],
            ..SyncReport::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["duplicates"][0], "x.srt");
        assert!(json["finished_at"].is_string());
    }
}
