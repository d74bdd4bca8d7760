//! Subtitle track record and format classification.

use super::ParseError;
use phf::phf_map;

/// How subtitle cues are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubtitleKind {
    /// Picture-based cues (VOBSUB, PGS)
    Bitmap,
    /// Text cues (closed captions, SRT, SSA)
    Text,
    #[default]
    Unknown,
}

impl std::str::FromStr for SubtitleKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitmap" => Ok(SubtitleKind::Bitmap),
            "text" => Ok(SubtitleKind::Text),
            _ => Err(ParseError(format!("invalid subtitle kind: {}", s))),
        }
    }
}

/// Subtitle stream format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubtitleFormat {
    /// DVD subpictures
    VobSub,
    /// Blu-ray presentation graphics
    Pgs,
    /// CEA-608 closed captions
    Cc608,
    /// CEA-708 closed captions
    Cc708,
    /// SubRip
    Srt,
    /// SubStation Alpha
    Ssa,
    /// Plain UTF-8 text
    Utf8,
    /// MP4 timed text
    Tx3g,
    #[default]
    Other,
}

static SUBTITLE_FORMATS: phf::Map<&'static str, SubtitleFormat> = phf_map! {
    "vobsub" => SubtitleFormat::VobSub,
    "pgs" => SubtitleFormat::Pgs,
    "cc608" => SubtitleFormat::Cc608,
    "cc" => SubtitleFormat::Cc608,
    "cc708" => SubtitleFormat::Cc708,
    "srt" => SubtitleFormat::Srt,
    "ssa" => SubtitleFormat::Ssa,
    "ass" => SubtitleFormat::Ssa,
    "utf-8" => SubtitleFormat::Utf8,
    "utf8" => SubtitleFormat::Utf8,
    "tx3g" => SubtitleFormat::Tx3g,
};

impl SubtitleFormat {
    /// Classify format text as printed by the scanner, falling back to `Other`.
    pub fn classify(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }

    /// The storage kind implied by the format.
    pub fn kind(&self) -> SubtitleKind {
        match self {
            SubtitleFormat::VobSub | SubtitleFormat::Pgs => SubtitleKind::Bitmap,
            SubtitleFormat::Other => SubtitleKind::Unknown,
            _ => SubtitleKind::Text,
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubtitleFormat::VobSub => write!(f, "VOBSUB"),
            SubtitleFormat::Pgs => write!(f, "PGS"),
            SubtitleFormat::Cc608 => write!(f, "CC608"),
            SubtitleFormat::Cc708 => write!(f, "CC708"),
            SubtitleFormat::Srt => write!(f, "SRT"),
            SubtitleFormat::Ssa => write!(f, "SSA"),
            SubtitleFormat::Utf8 => write!(f, "UTF-8"),
            SubtitleFormat::Tx3g => write!(f, "TX3G"),
            SubtitleFormat::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for SubtitleFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUBTITLE_FORMATS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseError(format!("unknown subtitle format: {}", s)))
    }
}

/// A subtitle track of a title.
///
/// Built from a scanner line such as
/// `+ 1, English (iso639-2: eng) (Bitmap)(VOBSUB)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subtitle {
    /// 1-based track number.
    pub index: u32,
    /// Language text.
    pub language: String,
    /// ISO 639-2 language code.
    pub iso639_2: Option<String>,
    /// Storage kind.
    pub kind: SubtitleKind,
    /// Format text as printed (e.g. "VOBSUB").
    pub format_name: Option<String>,
    /// Format family.
    pub format: SubtitleFormat,
}
