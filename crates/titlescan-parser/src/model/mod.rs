//! Data model types for parsed scan reports.
//!
//! A scan report describes a list of titles. Each title owns its chapters,
//! audio tracks and subtitle tracks, and a crop region.

mod audio;
mod chapter;
mod geometry;
mod subtitle;
mod title;

pub use audio::{AudioCodec, AudioTrack};
pub use chapter::Chapter;
pub use geometry::{Cropping, PixelAspect, Resolution};
pub use subtitle::{Subtitle, SubtitleFormat, SubtitleKind};
pub use title::{default_title, format_duration, Title};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
