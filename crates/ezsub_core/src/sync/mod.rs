//! Rename synchronization: subtitles take their paired video's name.
//!
//! Pairing is positional. For each index `i` the subtitle is renamed to
//! `<video base name>.<subtitle extension>` inside its own directory.
//!
//! - `plan_renames`: pure target computation
//! - `preview_names`: dry run that classifies every pair
//! - `sync_names`: performs the renames and returns a `SyncReport`
//!
//! A length mismatch aborts before any file is touched. Existing targets
//! are counted as duplicates and OS rename failures as failed; neither
//! stops the remaining pairs.

mod error;
mod plan;
mod report;
mod rename;

pub use error::SyncError;
pub use plan::{plan_renames, preview_names, PlannedAction, PlannedRename, RenamePair};
pub use rename::sync_names;
pub use report::{FailedRename, RenamedFile, SyncReport};
