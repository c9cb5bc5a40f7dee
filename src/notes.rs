//! Notes
//!
//! A note has a title and body, an author, and optionally a parent note, a color and a tag.
//! The parent is never verified, it might point to a note that does not exist (anymore).

/// Color of a note when none is given
pub const DEFAULT_COLOR: &str = "#28A745";
