//! Pair computation and dry-run classification.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::SyncError;
use crate::models::{base_name, display_name, extension_of};

/// A video/subtitle pair and the subtitle's target path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    /// Position in both lists.
    pub index: usize,
    /// Video providing the base name.
    pub video: PathBuf,
    /// Subtitle to rename.
    pub subtitle: PathBuf,
    /// Where the subtitle will be moved.
    pub target: PathBuf,
}

impl RenamePair {
    /// Build the pair for one index.
    pub fn new(index: usize, video: &Path, subtitle: &Path) -> Self {
        Self {
            index,
            video: video.to_path_buf(),
            subtitle: subtitle.to_path_buf(),
            target: target_path(video, subtitle),
        }
    }

    /// Target filename without directory.
    pub fn target_name(&self) -> String {
        display_name(&self.target)
    }
}

/// Compute `<subtitle dir>/<video base name>[.<subtitle extension>]`.
fn target_path(video: &Path, subtitle: &Path) -> PathBuf {
    let mut name = base_name(video);
    if let Some(ext) = extension_of(subtitle) {
        name.push('.');
        name.push_str(&ext);
    }

    match subtitle.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Pair two lists by position and compute each subtitle's target.
///
/// Touches no files. Fails if the lists differ in length.
pub fn plan_renames<V, S>(videos: &[V], subtitles: &[S]) -> Result<Vec<RenamePair>, SyncError>
where
    V: AsRef<Path>,
    S: AsRef<Path>,
{
    if videos.len() != subtitles.len() {
        return Err(SyncError::length_mismatch(videos.len(), subtitles.len()));
    }

    Ok(videos
        .iter()
        .zip(subtitles.iter())
        .enumerate()
        .map(|(idx, (video, subtitle))| RenamePair::new(idx, video.as_ref(), subtitle.as_ref()))
        .collect())
}

/// What a sync would do with a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    /// The subtitle would be renamed.
    WillRename,
    /// Another file occupies the target; it would count as a duplicate.
    Conflict,
    /// The subtitle no longer exists; the rename would fail.
    MissingSource,
}

impl std::fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannedAction::WillRename => write!(f, "rename"),
            PlannedAction::Conflict => write!(f, "duplicate"),
            PlannedAction::MissingSource => write!(f, "missing"),
        }
    }
}

/// A pair with its predicted outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    #[serde(flatten)]
    pub pair: RenamePair,
    pub action: PlannedAction,
}

/// Dry run: classify every pair against the current file system.
///
/// Earlier planned renames are taken into account, so two subtitles aimed
/// at the same target show the second as a conflict. A subtitle that
/// already carries its target name occupies that target and is a conflict
/// too.
pub fn preview_names<V, S>(videos: &[V], subtitles: &[S]) -> Result<Vec<PlannedRename>, SyncError>
where
    V: AsRef<Path>,
    S: AsRef<Path>,
{
    let pairs = plan_renames(videos, subtitles)?;
    let mut claimed: Vec<PathBuf> = Vec::new();

    Ok(pairs
        .into_iter()
        .map(|pair| {
            let action = if pair.target.exists() || claimed.contains(&pair.target) {
                PlannedAction::Conflict
            } else if !pair.subtitle.exists() {
                PlannedAction::MissingSource
            } else {
                claimed.push(pair.target.clone());
                PlannedAction::WillRename
            };
            PlannedRename { pair, action }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn target_uses_video_base_and_subtitle_extension() {
        let pair = RenamePair::new(
            0,
            Path::new("/videos/Show S01E01 [1080p].mkv"),
            Path::new("/subs/random_name.smi"),
        );
        assert_eq!(pair.target, PathBuf::from("/subs/Show S01E01 [1080p].smi"));
        assert_eq!(pair.target_name(), "Show S01E01 [1080p].smi");
    }

    #[test]
    fn only_last_extension_is_swapped() {
        let pair = RenamePair::new(0, Path::new("/v/a.b.mkv"), Path::new("/s/x.en.srt"));
        assert_eq!(pair.target, PathBuf::from("/s/a.b.srt"));
    }

    #[test]
    fn subtitle_without_extension_gets_bare_name() {
        let pair = RenamePair::new(0, Path::new("/v/movie.mp4"), Path::new("/s/subtitle"));
        assert_eq!(pair.target, PathBuf::from("/s/movie"));
    }

    #[test]
    fn plan_rejects_length_mismatch() {
        let videos = vec![PathBuf::from("/v/a.mkv"), PathBuf::from("/v/b.mkv")];
        let subs = vec![PathBuf::from("/s/1.srt")];
        assert_eq!(
            plan_renames(&videos, &subs),
            Err(SyncError::length_mismatch(2, 1))
        );
    }

    #[test]
    fn plan_pairs_by_position() {
        let videos = vec![PathBuf::from("/v/a.mkv"), PathBuf::from("/v/b.mkv")];
        let subs = vec![PathBuf::from("/s/2.srt"), PathBuf::from("/s/1.ass")];
        let pairs = plan_renames(&videos, &subs).unwrap();
        assert_eq!(pairs[0].target, PathBuf::from("/s/a.srt"));
        assert_eq!(pairs[1].target, PathBuf::from("/s/b.ass"));
        assert_eq!(pairs[1].index, 1);
    }

    #[test]
    fn preview_classifies_pairs() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        for name in ["ep1.srt", "ep2.srt", "taken.srt", "Show 3.srt"] {
            fs::write(d.join(name), b"x").unwrap();
        }
        let videos = vec![
            d.join("Show 1.mkv"),
            d.join("taken.mkv"),
            d.join("Show 3.mkv"),
            d.join("Show 4.mkv"),
        ];
        let subs = vec![
            d.join("ep1.srt"),
            d.join("ep2.srt"),
            d.join("Show 3.srt"),
            d.join("gone.srt"),
        ];

        let actions: Vec<PlannedAction> = preview_names(&videos, &subs)
            .unwrap()
            .into_iter()
            .map(|p| p.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                PlannedAction::WillRename,
                PlannedAction::Conflict,
                PlannedAction::Conflict,
                PlannedAction::MissingSource,
            ]
        );
        // Dry run leaves files alone
        assert!(d.join("ep1.srt").exists());
    }

    #[test]
    fn preview_treats_subtitle_named_like_video_as_conflict() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        fs::write(d.join("ep1.srt"), b"x").unwrap();

        let preview = preview_names(&[d.join("ep1.mkv")], &[d.join("ep1.srt")]).unwrap();
        assert_eq!(preview[0].pair.target, preview[0].pair.subtitle);
        assert_eq!(preview[0].action, PlannedAction::Conflict);
        assert_eq!(preview[0].action.to_string(), "duplicate");
    }

    #[test]
    fn preview_flags_colliding_targets_within_batch() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        fs::write(d.join("a.srt"), b"x").unwrap();
        fs::write(d.join("b.srt"), b"x").unwrap();
        let videos = vec![d.join("v1/same.mkv"), d.join("v2/same.mkv")];
        let subs = vec![d.join("a.srt"), d.join("b.srt")];

        let preview = preview_names(&videos, &subs).unwrap();
        assert_eq!(preview[0].action, PlannedAction::WillRename);
        assert_eq!(preview[1].action, PlannedAction::Conflict);
    }
}
