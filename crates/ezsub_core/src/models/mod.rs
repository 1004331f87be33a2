//! Data models for E.Z Subtitles.
//!
//! This module contains the small set of core types shared by every layer:
//! - `MediaKind`: which list (videos or subtitles) a file belongs to
//! - `ExtensionFilter`: case-insensitive extension allow-list
//! - `Direction`: reorder direction for list entries

mod enums;
mod media;

pub use enums::{Direction, MediaKind};
pub use media::{base_name, display_name, extension_of, ExtensionFilter};
