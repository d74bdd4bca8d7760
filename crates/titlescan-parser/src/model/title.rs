//! Title record.

use super::{AudioTrack, Chapter, Cropping, PixelAspect, Resolution, Subtitle};
use std::time::Duration;

/// One playable unit of a scanned source.
///
/// Fields the scanner did not report, or reported in a form that could not be
/// decoded, keep their default value (zero, empty, `None`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Title {
    /// Title number as printed by the scanner.
    pub number: u32,
    /// Name of the stream or file the title was read from.
    pub source_name: Option<String>,
    /// Whether the scanner flagged this title as the main feature.
    pub main_feature: bool,
    /// Number of camera angles (zero when angle detection was off).
    pub angle_count: u32,
    /// Playback duration.
    pub duration: Duration,
    /// Frame size.
    pub resolution: Resolution,
    /// Pixel aspect ratio.
    pub pixel_aspect: PixelAspect,
    /// Display aspect ratio (e.g. 1.78).
    pub display_aspect: f64,
    /// Frames per second.
    pub frame_rate: f64,
    /// Detected black borders.
    pub autocrop: Cropping,
    /// Chapters in playback order.
    pub chapters: Vec<Chapter>,
    /// Audio tracks in scanner order.
    pub audio_tracks: Vec<AudioTrack>,
    /// Subtitle tracks in scanner order.
    pub subtitles: Vec<Subtitle>,
}

impl Title {
    /// Create an empty title with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Frame size after applying the detected crop.
    pub fn cropped_resolution(&self) -> Resolution {
        self.autocrop.apply(self.resolution)
    }

    /// Sum of the chapter durations that were reported.
    pub fn chapter_duration(&self) -> Duration {
        self.chapters.iter().filter_map(|c| c.duration).sum()
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number, format_duration(self.duration))
    }
}

/// Format a duration as `HH:MM:SS`, the way the scanner prints it.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// Pick the title a user most likely wants.
///
/// The first title flagged as main feature wins; otherwise the longest title,
/// with ties going to the one listed first.
pub fn default_title(titles: &[Title]) -> Option<&Title> {
    titles.iter().find(|t| t.main_feature).or_else(|| {
        titles
            .iter()
            .rev()
            .max_by_key(|t| t.duration)
    })
}
