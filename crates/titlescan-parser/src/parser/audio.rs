//! Audio track list parsing.

use std::io;

use super::fields::{self, Rate};
use super::{collect_entries, EntryLine};
use crate::cursor::LineCursor;
use crate::model::{AudioCodec, AudioTrack};

/// Consume the audio entries following a `+ audio tracks:` header.
pub(crate) fn parse_list<I>(cursor: &mut LineCursor<I>, header_indent: usize) -> Vec<AudioTrack>
where
    I: Iterator<Item = io::Result<String>>,
{
    collect_entries(cursor, header_indent, parse_entry)
}

/// Decode one entry such as
/// `1, English (AC3) (5.1 ch) (iso639-2: eng), 48000Hz, 448000bps`.
fn parse_entry(entry: &EntryLine<'_>) -> AudioTrack {
    let described = fields::parse_described(entry.body);
    let mut track = AudioTrack {
        index: entry.index,
        language: described.label.to_string(),
        ..Default::default()
    };

    let mut group_bitrate = None;
    let mut description = Vec::new();

    for group in &described.groups {
        if let Some(code) = fields::parse_iso_code(group) {
            track.iso639_2 = Some(code.to_string());
        } else if let Some(Rate::Bitrate(bps)) = fields::parse_rate(group) {
            group_bitrate = Some(bps);
        } else if track.channel_layout.is_none() && is_layout(group) {
            track.channel_layout = Some(group.to_string());
        } else if track.codec_name.is_none() {
            track.codec_name = Some(group.to_string());
            track.codec = AudioCodec::classify(group);
        } else {
            description.push(*group);
        }
    }

    for extra in &described.extras {
        match fields::parse_rate(extra) {
            Some(Rate::SampleRate(hz)) => track.sample_rate = Some(hz),
            Some(Rate::Bitrate(bps)) => track.bitrate = Some(bps),
            None => description.push(*extra),
        }
    }

    if track.bitrate.is_none() {
        track.bitrate = group_bitrate;
    }
    if !description.is_empty() {
        track.description = Some(description.join(", "));
    }
    track
}

/// `5.1 ch` style layouts and matrix-encoded names like `Dolby Surround`.
fn is_layout(group: &str) -> bool {
    if fields::is_channel_layout(group) {
        return true;
    }
    group
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("dolby"))
        && AudioCodec::classify(group) == AudioCodec::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: u32, body: &str) -> AudioTrack {
        parse_entry(&EntryLine {
            line: 1,
            index,
            body,
        })
    }

    #[test]
    fn test_dvd_ac3_track() {
        let track = entry(1, "English (AC3) (5.1 ch) (iso639-2: eng), 48000Hz, 448000bps");
        assert_eq!(track.index, 1);
        assert_eq!(track.language, "English");
        assert_eq!(track.codec_name.as_deref(), Some("AC3"));
        assert_eq!(track.codec, AudioCodec::Ac3);
        assert_eq!(track.channel_layout.as_deref(), Some("5.1 ch"));
        assert_eq!(track.channel_count(), Some(6));
        assert_eq!(track.iso639_2.as_deref(), Some("eng"));
        assert_eq!(track.sample_rate, Some(48000));
        assert_eq!(track.bitrate, Some(448000));
        assert_eq!(track.description, None);
    }

    #[test]
    fn test_matrix_layout_and_commentary() {
        let track = entry(
            2,
            "English (AC3) (Dolby Surround) (Director's Commentary) (iso639-2: eng), 48000Hz, 192000bps",
        );
        assert_eq!(track.codec, AudioCodec::Ac3);
        assert_eq!(track.channel_layout.as_deref(), Some("Dolby Surround"));
        assert_eq!(track.description.as_deref(), Some("Director's Commentary"));
        assert_eq!(track.bitrate, Some(192000));
    }

    #[test]
    fn test_group_bitrate_fallback() {
        let track = entry(1, "Francais (TrueHD) (7.1 ch) (1536 kbps) (iso639-2: fre)");
        assert_eq!(track.codec, AudioCodec::TrueHd);
        assert_eq!(track.bitrate, Some(1_536_000));
        assert_eq!(track.sample_rate, None);
        assert_eq!(track.channel_count(), Some(8));
    }

    #[test]
    fn test_unknown_codec_keeps_text() {
        let track = entry(3, "Unknown (ATRAC) (2.0 ch)");
        assert_eq!(track.codec_name.as_deref(), Some("ATRAC"));
        assert_eq!(track.codec, AudioCodec::Other);
    }

    #[test]
    fn test_bare_language() {
        let track = entry(5, "Japanese");
        assert_eq!(track.index, 5);
        assert_eq!(track.language, "Japanese");
        assert_eq!(track.codec_name, None);
    }

    #[test]
    fn test_list_without_indices_keeps_languages() {
        let text = "    + English, 48000Hz\n    + Deutsch (MP2), 44100Hz\n";
        let mut cursor = LineCursor::from_text(text);
        let tracks = parse_list(&mut cursor, 2);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].index, 1);
        assert_eq!(tracks[0].language, "English");
        assert_eq!(tracks[0].sample_rate, Some(48000));
        assert_eq!(tracks[1].index, 2);
        assert_eq!(tracks[1].language, "Deutsch");
        assert_eq!(tracks[1].codec, AudioCodec::Mpeg);
        assert_eq!(tracks[1].sample_rate, Some(44100));
    }
}
