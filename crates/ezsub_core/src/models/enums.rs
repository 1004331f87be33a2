//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Kind of media file held by a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Subtitle,
}

impl MediaKind {
    /// Default extension allow-list for this kind.
    pub fn default_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Video => &["mp4", "mkv"],
            MediaKind::Subtitle => &["smi", "srt", "ass"],
        }
    }

    /// Human-readable list title.
    pub fn title(&self) -> &'static str {
        match self {
            MediaKind::Video => "Videos",
            MediaKind::Subtitle => "Subtitles",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// Direction for moving a list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl Direction {
    /// Apply this direction to an index, returning `None` when it would leave `0..len`.
    pub fn step(&self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index + 1,
        };
        (target < len).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extensions_match_kind() {
        assert!(MediaKind::Video.default_extensions().contains(&"mkv"));
        assert!(MediaKind::Subtitle.default_extensions().contains(&"smi"));
        assert!(!MediaKind::Subtitle.default_extensions().contains(&"mp4"));
    }

    #[test]
    fn direction_step_stays_in_bounds() {
        assert_eq!(Direction::Up.step(0, 3), None);
        assert_eq!(Direction::Up.step(2, 3), Some(1));
        assert_eq!(Direction::Down.step(1, 3), Some(2));
        assert_eq!(Direction::Down.step(2, 3), None);
    }

    #[test]
    fn media_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MediaKind::Subtitle).unwrap();
        assert_eq!(json, "\"subtitle\"");
    }
}
