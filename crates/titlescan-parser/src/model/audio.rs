//! Audio track record and codec classification.

use super::ParseError;
use phf::phf_map;

/// Audio codec family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AudioCodec {
    /// Dolby Digital
    Ac3,
    /// Dolby Digital Plus
    Eac3,
    /// DTS core
    Dts,
    /// DTS-HD (HRA or MA)
    DtsHd,
    /// Dolby TrueHD
    TrueHd,
    /// Linear PCM
    Lpcm,
    /// MPEG-1/2 layer I/II
    Mpeg,
    /// AAC
    Aac,
    /// FLAC
    Flac,
    /// Vorbis
    Vorbis,
    /// Opus
    Opus,
    /// MPEG layer III
    Mp3,
    /// Anything the scanner printed that is not listed above
    #[default]
    Other,
}

static AUDIO_CODECS: phf::Map<&'static str, AudioCodec> = phf_map! {
    "ac3" => AudioCodec::Ac3,
    "dolby digital" => AudioCodec::Ac3,
    "e-ac3" => AudioCodec::Eac3,
    "eac3" => AudioCodec::Eac3,
    "e-ac-3" => AudioCodec::Eac3,
    "dolby digital plus" => AudioCodec::Eac3,
    "dts" => AudioCodec::Dts,
    "dts-hd" => AudioCodec::DtsHd,
    "dts-hd ma" => AudioCodec::DtsHd,
    "dts-hd hra" => AudioCodec::DtsHd,
    "truehd" => AudioCodec::TrueHd,
    "dolby truehd" => AudioCodec::TrueHd,
    "lpcm" => AudioCodec::Lpcm,
    "pcm" => AudioCodec::Lpcm,
    "mpeg1" => AudioCodec::Mpeg,
    "mpeg2" => AudioCodec::Mpeg,
    "mpeg" => AudioCodec::Mpeg,
    "mp2" => AudioCodec::Mpeg,
    "aac" => AudioCodec::Aac,
    "flac" => AudioCodec::Flac,
    "vorbis" => AudioCodec::Vorbis,
    "opus" => AudioCodec::Opus,
    "mp3" => AudioCodec::Mp3,
};

impl AudioCodec {
    /// Classify codec text as printed by the scanner, falling back to `Other`.
    pub fn classify(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }

    /// True for codecs that carry a lossless stream.
    pub fn is_lossless(&self) -> bool {
        matches!(
            self,
            AudioCodec::TrueHd | AudioCodec::Lpcm | AudioCodec::Flac | AudioCodec::DtsHd
        )
    }
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioCodec::Ac3 => write!(f, "AC3"),
            AudioCodec::Eac3 => write!(f, "E-AC3"),
            AudioCodec::Dts => write!(f, "DTS"),
            AudioCodec::DtsHd => write!(f, "DTS-HD"),
            AudioCodec::TrueHd => write!(f, "TrueHD"),
            AudioCodec::Lpcm => write!(f, "LPCM"),
            AudioCodec::Mpeg => write!(f, "MPEG"),
            AudioCodec::Aac => write!(f, "AAC"),
            AudioCodec::Flac => write!(f, "FLAC"),
            AudioCodec::Vorbis => write!(f, "Vorbis"),
            AudioCodec::Opus => write!(f, "Opus"),
            AudioCodec::Mp3 => write!(f, "MP3"),
            AudioCodec::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for AudioCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AUDIO_CODECS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseError(format!("unknown audio codec: {}", s)))
    }
}

/// An audio track of a title.
///
/// Built from a single scanner line such as
/// `+ 1, English (AC3) (5.1 ch) (iso639-2: eng), 48000Hz, 448000bps`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioTrack {
    /// 1-based track number.
    pub index: u32,
    /// Language or description text preceding the attribute groups.
    pub language: String,
    /// Codec text as printed (e.g. "AC3").
    pub codec_name: Option<String>,
    /// Codec family.
    pub codec: AudioCodec,
    /// Channel layout text (e.g. "5.1 ch", "Dolby Surround").
    pub channel_layout: Option<String>,
    /// ISO 639-2 language code.
    pub iso639_2: Option<String>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Bitrate in bits per second.
    pub bitrate: Option<u32>,
    /// Any other attribute group (e.g. "Director's Commentary 1").
    pub description: Option<String>,
}

impl AudioTrack {
    /// Number of discrete channels implied by the layout.
    ///
    /// `5.1 ch` gives 6, `2.0 ch` gives 2, matrix-encoded stereo gives 2.
    pub fn channel_count(&self) -> Option<u32> {
        let layout = self.channel_layout.as_deref()?.trim().to_ascii_lowercase();
        if layout.starts_with("dolby") {
            return Some(2);
        }
        let numeric = layout.strip_suffix("ch").unwrap_or(&layout).trim();
        let (main, lfe) = numeric.split_once('.').unwrap_or((numeric, "0"));
        let main: u32 = main.trim().parse().ok()?;
        let lfe: u32 = lfe.trim().parse().ok()?;
        main.checked_add(lfe)
    }
}
