//! Performing the renames.

use std::fs;
use std::path::Path;

use chrono::Local;

use super::error::SyncError;
use super::plan::plan_renames;
use super::report::{FailedRename, RenamedFile, SyncReport};

/// Rename every subtitle after its paired video.
///
/// Returns `SyncError::LengthMismatch` without touching any file when the
/// lists differ in length. Otherwise every pair is attempted: an existing
/// target is recorded as a duplicate (including a subtitle that already
/// carries its target name), an OS error as a failure.
pub fn sync_names<V, S>(videos: &[V], subtitles: &[S]) -> Result<SyncReport, SyncError>
where
    V: AsRef<Path>,
    S: AsRef<Path>,
{
    let pairs = plan_renames(videos, subtitles).map_err(|e| {
        tracing::warn!("{}", e);
        e
    })?;

    tracing::info!("Synchronizing {} subtitle name(s)", pairs.len());
    let mut report = SyncReport::default();

    for pair in pairs {
        if pair.target.exists() {
            tracing::warn!("Target exists, skipping: {}", pair.target.display());
            report.duplicates.push(pair.target_name());
            continue;
        }

        match fs::rename(&pair.subtitle, &pair.target) {
            Ok(()) => {
                tracing::debug!(
                    "Renamed {} -> {}",
                    pair.subtitle.display(),
                    pair.target.display()
                );
                report.renamed.push(RenamedFile {
                    index: pair.index,
                    from: pair.subtitle,
                    to: pair.target,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to rename {}: {}", pair.subtitle.display(), e);
                report.failed.push(FailedRename {
                    index: pair.index,
                    path: pair.subtitle,
                    error: e.to_string(),
                });
            }
        }
    }

    report.finished_at = Local::now();
    tracing::info!(
        "Sync finished: {} renamed, {} duplicate, {} failed",
        report.success_count(),
        report.duplicate_count(),
        report.failure_count()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn renames_all_pairs_when_targets_free() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        let videos: Vec<PathBuf> = (1..=3).map(|i| d.join(format!("Show E{:02}.mkv", i))).collect();
        let subs: Vec<PathBuf> = (1..=3).map(|i| d.join(format!("sub{}.srt", i))).collect();
        for s in &subs {
            write(s, "sub");
        }

        let report = sync_names(&videos, &subs).unwrap();
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(report.duplicate_count(), 0);
        assert!(d.join("Show E01.srt").exists());
        assert!(d.join("Show E03.srt").exists());
        assert!(!d.join("sub1.srt").exists());
    }

    #[test]
    fn existing_target_counts_as_duplicate_and_keeps_original() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        write(&d.join("movie.srt"), "existing");
        write(&d.join("random.srt"), "mine");

        let report = sync_names(&[d.join("movie.mkv")], &[d.join("random.srt")]).unwrap();
        assert_eq!(report.duplicates, vec!["movie.srt".to_string()]);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(report.success_count(), 0);
        assert_eq!(fs::read_to_string(d.join("random.srt")).unwrap(), "mine");
        assert_eq!(fs::read_to_string(d.join("movie.srt")).unwrap(), "existing");
    }

    #[test]
    fn length_mismatch_renames_nothing() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        write(&d.join("a.srt"), "a");

        let result = sync_names(&[d.join("x.mkv"), d.join("y.mkv")], &[d.join("a.srt")]);
        assert_eq!(result.unwrap_err(), SyncError::length_mismatch(2, 1));
        assert!(d.join("a.srt").exists());
        assert!(!d.join("x.srt").exists());
    }

    #[test]
    fn stale_subtitle_is_counted_as_failed() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        write(&d.join("ok.srt"), "ok");

        let report = sync_names(
            &[d.join("ep1.mkv"), d.join("ep2.mkv")],
            &[d.join("moved_away.srt"), d.join("ok.srt")],
        )
        .unwrap();
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failed[0].path, d.join("moved_away.srt"));
        assert_eq!(report.success_count(), 1);
        assert!(d.join("ep2.srt").exists());
    }

    #[test]
    fn subtitle_named_like_video_counts_as_duplicate() {
        let dir = tempdir().unwrap();
        let d = dir.path();
        write(&d.join("ep1.ass"), "x");

        let report = sync_names(&[d.join("ep1.mkv")], &[d.join("ep1.ass")]).unwrap();
        assert_eq!(report.duplicates, vec!["ep1.ass".to_string()]);
        assert!(!report.is_clean());
        assert_eq!(report.success_count(), 0);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(fs::read_to_string(d.join("ep1.ass")).unwrap(), "x");
    }

    #[test]
    fn subtitles_stay_in_their_own_directory() {
        let dir = tempdir().unwrap();
        let videos_dir = dir.path().join("videos");
        let subs_dir = dir.path().join("subs");
        fs::create_dir_all(&videos_dir).unwrap();
        fs::create_dir_all(&subs_dir).unwrap();
        write(&subs_dir.join("1.smi"), "x");

        let report = sync_names(&[videos_dir.join("Film.mp4")], &[subs_dir.join("1.smi")]).unwrap();
        assert_eq!(report.renamed[0].to, subs_dir.join("Film.smi"));
        assert!(subs_dir.join("Film.smi").exists());
        assert!(!videos_dir.join("Film.smi").exists());
    }
}
