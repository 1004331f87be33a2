//! Ordered file lists and drop handling.
//!
//! This module provides:
//! - `FileList`: ordered paths with a current selection (pairing order)
//! - `collect_dropped`: expands dropped files/folders through an extension filter
//! - `clean_file_url`: turns `file://` URIs from drag-drop into paths

mod collect;
mod list;
mod uri;

pub use collect::{collect_dropped, CollectError, CollectOutcome, SkippedPath};
pub use list::FileList;
pub use uri::clean_file_url;
