//! Two-list session: the state behind the video and subtitle panes.

use std::path::Path;

use crate::config::Settings;
use crate::files::{collect_dropped, CollectOutcome, FileList};
use crate::models::{Direction, ExtensionFilter, MediaKind};
use crate::sync::{
    plan_renames, preview_names, sync_names, PlannedRename, RenamePair, SyncError, SyncReport,
};

/// Videos and subtitles waiting to be paired.
#[derive(Debug, Clone)]
pub struct SyncSession {
    videos: FileList,
    subtitles: FileList,
    video_filter: ExtensionFilter,
    subtitle_filter: ExtensionFilter,
    sort_on_drop: bool,
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SyncSession {
    /// Create an empty session configured from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let skip = settings.lists.skip_duplicates;
        Self {
            videos: FileList::new(skip),
            subtitles: FileList::new(skip),
            video_filter: settings.extensions.filter_for(MediaKind::Video),
            subtitle_filter: settings.extensions.filter_for(MediaKind::Subtitle),
            sort_on_drop: settings.lists.natural_sort_on_drop,
        }
    }

    /// Enable or disable natural sorting after drops.
    pub fn set_sort_on_drop(&mut self, enabled: bool) {
        self.sort_on_drop = enabled;
    }

    pub fn list(&self, kind: MediaKind) -> &FileList {
        match kind {
            MediaKind::Video => &self.videos,
            MediaKind::Subtitle => &self.subtitles,
        }
    }

    pub fn list_mut(&mut self, kind: MediaKind) -> &mut FileList {
        match kind {
            MediaKind::Video => &mut self.videos,
            MediaKind::Subtitle => &mut self.subtitles,
        }
    }

    pub fn filter(&self, kind: MediaKind) -> &ExtensionFilter {
        match kind {
            MediaKind::Video => &self.video_filter,
            MediaKind::Subtitle => &self.subtitle_filter,
        }
    }

    /// Drop files or folders onto a list.
    ///
    /// Accepted files are appended (then sorted if enabled). The outcome
    /// reports filtered and unreadable paths.
    pub fn drop_paths<I, P>(&mut self, kind: MediaKind, items: I) -> CollectOutcome
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut outcome = collect_dropped(items, self.filter(kind));
        let files = std::mem::take(&mut outcome.files);
        let sort = self.sort_on_drop;

        let list = self.list_mut(kind);
        let added = list.extend(files.iter().cloned());
        if sort {
            list.sort_naturally();
        }
        outcome.files = files;

        tracing::info!("Added {} {} file(s), list now has {}", added, kind, list.len());
        outcome
    }

    /// Natural sort of one list (selection preserved).
    pub fn sort(&mut self, kind: MediaKind) {
        self.list_mut(kind).sort_naturally();
    }

    /// Empty one list.
    pub fn reset(&mut self, kind: MediaKind) {
        self.list_mut(kind).clear();
        tracing::debug!("Reset {} list", kind);
    }

    /// Move the selected entry of one list.
    pub fn move_selected(&mut self, kind: MediaKind, direction: Direction) -> bool {
        self.list_mut(kind).move_selected(direction)
    }

    /// Current pairs with their targets.
    pub fn pairs(&self) -> Result<Vec<RenamePair>, SyncError> {
        plan_renames(self.videos.paths(), self.subtitles.paths())
    }

    /// Dry run of `sync`.
    pub fn preview(&self) -> Result<Vec<PlannedRename>, SyncError> {
        preview_names(self.videos.paths(), self.subtitles.paths())
    }

    /// Rename subtitles and point the subtitle list at the new names.
    pub fn sync(&mut self) -> Result<SyncReport, SyncError> {
        let report = sync_names(self.videos.paths(), self.subtitles.paths())?;
        for renamed in &report.renamed {
            self.subtitles.replace(renamed.index, renamed.to.clone());
        }
        Ok(report)
    }
}
