//! Errors that abort a sync before any rename happens.

use thiserror::Error;

/// Error aborting a whole synchronization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Video and subtitle lists differ in length; nothing was renamed.
    #[error("Video and subtitle counts differ ({videos} videos, {subtitles} subtitles); nothing was renamed")]
    LengthMismatch { videos: usize, subtitles: usize },
}

impl SyncError {
    /// Create a length mismatch error.
    pub fn length_mismatch(videos: usize, subtitles: usize) -> Self {
        Self::LengthMismatch { videos, subtitles }
    }
}
