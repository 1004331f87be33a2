//! Ordered file list with a current selection.

use std::path::{Path, PathBuf};

use crate::models::{display_name, Direction};
use crate::naming::sort_paths_naturally;

/// Ordered list of file paths.
///
/// Order defines pairing: entry `i` of the video list is paired with
/// entry `i` of the subtitle list. The optional selection mirrors the
/// current row of a list widget and survives reordering.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    /// Paths in display/pairing order.
    paths: Vec<PathBuf>,
    /// Currently selected index.
    selected: Option<usize>,
    /// Ignore files whose filename is already listed when extending.
    skip_duplicates: bool,
}

impl FileList {
    /// Create an empty list.
    pub fn new(skip_duplicates: bool) -> Self {
        Self {
            paths: Vec::new(),
            selected: None,
            skip_duplicates,
        }
    }

    /// Create a list from existing paths (kept in the given order).
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            selected: None,
            skip_duplicates: false,
        }
    }

    /// Get all paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Get a path by index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if list is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check if a path is already listed.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Check if a file with the same filename is already listed.
    pub fn contains_name(&self, path: &Path) -> bool {
        let name = display_name(path);
        self.paths.iter().any(|p| display_name(p) == name)
    }

    /// Append paths, returning how many were added.
    ///
    /// With `skip_duplicates`, a path is ignored when its filename is
    /// already listed, even if it lives in another folder.
    pub fn extend<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.paths.len();
        for path in paths {
            if self.skip_duplicates && self.contains_name(&path) {
                tracing::debug!("Already listed, skipping: {}", path.display());
                continue;
            }
            self.paths.push(path);
        }
        self.paths.len() - before
    }

    /// Currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Currently selected path.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.and_then(|idx| self.get(idx))
    }

    /// Select an entry. Returns false if the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.paths.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selected entry one step, keeping it selected.
    ///
    /// Returns false when nothing is selected or the entry is already at the edge.
    pub fn move_selected(&mut self, direction: Direction) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        let Some(target) = direction.step(current, self.paths.len()) else {
            return false;
        };

        let path = self.paths.remove(current);
        self.paths.insert(target, path);
        self.selected = Some(target);
        true
    }

    /// Move an entry from one position to another.
    pub fn move_entry(&mut self, from: usize, to: usize) {
        if from < self.paths.len() && to < self.paths.len() && from != to {
            let path = self.paths.remove(from);
            self.paths.insert(to, path);
            self.selected = self.selected.map(|sel| match sel {
                s if s == from => to,
                s if from < s && s <= to => s - 1,
                s if to <= s && s < from => s + 1,
                s => s,
            });
        }
    }

    /// Sort by filename using natural order, keeping the selected path selected.
    pub fn sort_naturally(&mut self) {
        let selected_path = self.selected_path().map(Path::to_path_buf);

        sort_paths_naturally(&mut self.paths);

        self.selected = selected_path.and_then(|sel| self.paths.iter().position(|p| *p == sel));
    }

    /// Remove an entry by index.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        if index >= self.paths.len() {
            return None;
        }
        let removed = self.paths.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Replace the path at an index (e.g. after a rename).
    pub fn replace(&mut self, index: usize, path: PathBuf) -> bool {
        match self.paths.get_mut(index) {
            Some(slot) => {
                *slot = path;
                true
            }
            None => false,
        }
    }

    /// Remove every entry (list reset).
    pub fn clear(&mut self) {
        self.paths.clear();
        self.selected = None;
    }

    /// Filenames for display, in list order.
    pub fn display_names(&self) -> Vec<String> {
        self.paths.iter().map(|p| display_name(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> FileList {
        FileList::from_paths(names.iter().map(|n| PathBuf::from(format!("/m/{}", n))).collect())
    }

    #[test]
    fn extend_skips_duplicates_when_enabled() {
        let mut files = FileList::new(true);
        let added = files.extend(vec![
            PathBuf::from("/m/a.srt"),
            PathBuf::from("/m/b.srt"),
            PathBuf::from("/m/a.srt"),
        ]);
        assert_eq!(added, 2);
        assert_eq!(files.len(), 2);

        let mut files = FileList::new(false);
        files.extend(vec![PathBuf::from("/m/a.srt"), PathBuf::from("/m/a.srt")]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn extend_skips_same_filename_from_other_folder() {
        let mut files = FileList::new(true);
        let added = files.extend(vec![
            PathBuf::from("/season1/ep1.srt"),
            PathBuf::from("/season2/ep1.srt"),
            PathBuf::from("/season2/ep2.srt"),
        ]);
        assert_eq!(added, 2);
        assert_eq!(files.get(0), Some(Path::new("/season1/ep1.srt")));
        assert!(files.contains_name(Path::new("/elsewhere/ep2.srt")));
        assert!(!files.contains(Path::new("/elsewhere/ep2.srt")));
    }

    #[test]
    fn move_selected_follows_item() {
        let mut files = list(&["a.srt", "b.srt", "c.srt"]);
        assert!(files.select(2));
        assert!(files.move_selected(Direction::Up));
        assert_eq!(files.display_names(), vec!["a.srt", "c.srt", "b.srt"]);
        assert_eq!(files.selected(), Some(1));
    }

    #[test]
    fn move_selected_at_edges_is_noop() {
        let mut files = list(&["a.srt", "b.srt"]);
        files.select(0);
        assert!(!files.move_selected(Direction::Up));
        files.select(1);
        assert!(!files.move_selected(Direction::Down));
        assert_eq!(files.display_names(), vec!["a.srt", "b.srt"]);
    }

    #[test]
    fn move_without_selection_is_noop() {
        let mut files = list(&["a.srt", "b.srt"]);
        assert!(!files.move_selected(Direction::Down));
    }

    #[test]
    fn sort_keeps_selected_item() {
        let mut files = list(&["ep10.mkv", "ep2.mkv", "ep1.mkv"]);
        files.select(0);
        files.sort_naturally();
        assert_eq!(files.display_names(), vec!["ep1.mkv", "ep2.mkv", "ep10.mkv"]);
        assert_eq!(files.selected(), Some(2));
        assert_eq!(files.selected_path(), Some(Path::new("/m/ep10.mkv")));
    }

    #[test]
    fn remove_adjusts_selection() {
        let mut files = list(&["a", "b", "c"]);
        files.select(2);
        files.remove(0);
        assert_eq!(files.selected(), Some(1));
        files.remove(1);
        assert_eq!(files.selected(), None);
        assert!(files.remove(5).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut files = list(&["a", "b"]);
        files.select(1);
        files.clear();
        assert!(files.is_empty());
        assert_eq!(files.selected(), None);
    }

    #[test]
    fn move_entry_carries_selection() {
        let mut files = list(&["a", "b", "c"]);
        files.select(0);
        files.move_entry(0, 2);
        assert_eq!(files.display_names(), vec!["b", "c", "a"]);
        assert_eq!(files.selected(), Some(2));

        files.select(0);
        files.move_entry(2, 0);
        assert_eq!(files.display_names(), vec!["a", "b", "c"]);
        assert_eq!(files.selected_path(), Some(Path::new("/m/b")));
    }
}
