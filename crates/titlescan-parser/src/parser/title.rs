//! Title block parsing.
//!
//! A block opens with a `+ title N:` marker, followed by scalar field lines
//! and then the chapter, audio and subtitle sections. Scalar fields are
//! matched through a table keyed by line kind, so a missing optional line
//! (angles when detection is off, autocrop on some sources) never shifts
//! the lines after it.

use std::io;

use tracing::{debug, trace, warn};

use super::fields;
use super::{audio, chapter, is_noise, subtitle};
use crate::config::ParserConfig;
use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::lexer::LineKind;
use crate::model::Title;

/// Decodes the value part of a field line into the title.
///
/// Returns `None` when the value is malformed; the title is left untouched.
type Setter = fn(&mut Title, &str, &ParserConfig) -> Option<()>;

/// Scalar field table: line kind, field name for diagnostics, setter.
const SCALAR_FIELDS: &[(LineKind, &str, Setter)] = &[
    (LineKind::MainFeature, "main feature", set_main_feature),
    (LineKind::Stream, "stream", set_source_name),
    (LineKind::Angles, "angle count", set_angle_count),
    (LineKind::Duration, "duration", set_duration),
    (LineKind::Geometry, "geometry", set_geometry),
    (LineKind::Autocrop, "autocrop", set_autocrop),
];

fn set_main_feature(title: &mut Title, _value: &str, _config: &ParserConfig) -> Option<()> {
    title.main_feature = true;
    Some(())
}

fn set_source_name(title: &mut Title, value: &str, _config: &ParserConfig) -> Option<()> {
    title.source_name = (!value.is_empty()).then(|| value.to_string());
    Some(())
}

fn set_angle_count(title: &mut Title, value: &str, config: &ParserConfig) -> Option<()> {
    if config.angle_detection {
        title.angle_count = fields::parse_count(value)?;
    }
    Some(())
}

fn set_duration(title: &mut Title, value: &str, _config: &ParserConfig) -> Option<()> {
    title.duration = fields::parse_duration(value)?;
    Some(())
}

fn set_geometry(title: &mut Title, value: &str, _config: &ParserConfig) -> Option<()> {
    let geometry = fields::parse_geometry(value)?;
    title.resolution = geometry.resolution;
    title.pixel_aspect = geometry.pixel_aspect;
    title.display_aspect = geometry.display_aspect;
    title.frame_rate = geometry.frame_rate;
    Some(())
}

fn set_autocrop(title: &mut Title, value: &str, _config: &ParserConfig) -> Option<()> {
    title.autocrop = fields::parse_crop(value)?;
    Some(())
}

fn scalar_field(kind: LineKind) -> Option<(&'static str, Setter)> {
    SCALAR_FIELDS
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, name, setter)| (*name, *setter))
}

/// Parse one title block starting at the cursor's current line.
///
/// Fails with [`Error::NotATitleBlock`] without moving the cursor when the
/// current line is not a title marker, and with [`Error::EndOfStream`] when
/// there is no line at all. A marker whose number cannot be decoded is
/// consumed before [`Error::MalformedTitleNumber`] is returned.
///
/// If the stream ends inside the block, the title is returned with whatever
/// was read up to that point.
pub fn parse_title<I>(cursor: &mut LineCursor<I>, config: &ParserConfig) -> Result<Title>
where
    I: Iterator<Item = io::Result<String>>,
{
    let line_no = cursor.line_number();
    let (number, text) = match cursor.peek_line() {
        None => return Err(Error::EndOfStream),
        Some(line) if line.kind != LineKind::Title => {
            return Err(Error::NotATitleBlock { line: line_no })
        }
        Some(line) => (fields::parse_title_number(line.text), line.text.to_string()),
    };
    cursor.advance();
    let Some(number) = number else {
        return Err(Error::MalformedTitleNumber {
            line: line_no,
            text,
        });
    };

    let mut title = Title::new(number);
    parse_scalars(cursor, config, &mut title);

    skip_noise(cursor);
    if let Some(indent) = take_header(cursor, LineKind::Chapters) {
        title.chapters = chapter::parse_list(cursor, indent);
    }
    skip_noise(cursor);
    if let Some(indent) = take_header(cursor, LineKind::AudioTracks) {
        title.audio_tracks = audio::parse_list(cursor, indent);
    }
    skip_noise(cursor);
    if let Some(indent) = take_header(cursor, LineKind::SubtitleTracks) {
        title.subtitles = subtitle::parse_list(cursor, indent);
    }

    debug!(
        title = title.number,
        duration = %crate::model::format_duration(title.duration),
        chapters = title.chapters.len(),
        audio_tracks = title.audio_tracks.len(),
        subtitles = title.subtitles.len(),
        "Parsed title"
    );
    Ok(title)
}

/// Apply scalar field lines until a line that is neither a field nor noise.
fn parse_scalars<I>(cursor: &mut LineCursor<I>, config: &ParserConfig, title: &mut Title)
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        let line_no = cursor.line_number();
        let Some(line) = cursor.peek_line() else {
            break;
        };

        if let Some((name, setter)) = scalar_field(line.kind) {
            if setter(title, line.rest, config).is_none() {
                let err = Error::malformed_field(name, line_no, line.rest);
                warn!(title = title.number, error = %err, "Keeping default value");
            }
        } else if is_noise(&line) {
            trace!(line = line_no, text = line.text, "Skipping noise inside title");
        } else {
            break;
        }
        cursor.advance();
    }
}

fn skip_noise<I>(cursor: &mut LineCursor<I>)
where
    I: Iterator<Item = io::Result<String>>,
{
    while cursor.peek_line().is_some_and(|line| is_noise(&line)) {
        cursor.advance();
    }
}

/// Consume a section header of the given kind, returning its indentation.
fn take_header<I>(cursor: &mut LineCursor<I>, kind: LineKind) -> Option<usize>
where
    I: Iterator<Item = io::Result<String>>,
{
    let indent = cursor
        .peek_line()
        .filter(|line| line.kind == kind)
        .map(|line| line.indent)?;
    cursor.advance();
    Some(indent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cropping, PixelAspect, Resolution};
    use std::time::Duration;

    const BLOCK: &str = "\
+ title 1:
  + Main Feature
  + stream: movie.mkv
  + angle(s) 2
  + duration: 01:30:00
  + size: 1920x1080, pixel aspect: 1/1, display aspect: 1.78, 23.976 fps
  + autocrop: 0/0/10/10
  + chapters:
    + 1: cells 0->0, 100 blocks, duration 00:45:00
    + 2: cells 1->1, 100 blocks, duration 00:45:00
  + audio tracks:
    + 1, English (AC3) (5.1 ch) (iso639-2: eng), 48000Hz, 448000bps
  + subtitle tracks:
    + 1, English (iso639-2: eng) (Bitmap)(VOBSUB)
+ title 2:
";

    #[test]
    fn test_full_block() {
        let mut cursor = LineCursor::from_text(BLOCK);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();

        assert_eq!(title.number, 1);
        assert!(title.main_feature);
        assert_eq!(title.source_name.as_deref(), Some("movie.mkv"));
        assert_eq!(title.angle_count, 2);
        assert_eq!(title.duration, Duration::from_secs(5400));
        assert_eq!(title.resolution, Resolution::new(1920, 1080));
        assert_eq!(title.pixel_aspect, PixelAspect::new(1, 1));
        assert_eq!(title.display_aspect, 1.78);
        assert_eq!(title.frame_rate, 23.976);
        assert_eq!(title.autocrop, Cropping::new(0, 0, 10, 10));
        assert_eq!(title.chapters.len(), 2);
        assert_eq!(title.audio_tracks.len(), 1);
        assert_eq!(title.subtitles.len(), 1);

        // Stops on the next marker without consuming it.
        assert_eq!(cursor.peek(), Some("+ title 2:"));
    }

    #[test]
    fn test_not_a_title_block_does_not_advance() {
        let mut cursor = LineCursor::from_text("  + combing detected\n+ title 1:\n");
        let err = parse_title(&mut cursor, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NotATitleBlock { line: 1 }));
        assert_eq!(cursor.line_number(), 1);
    }

    #[test]
    fn test_end_of_stream() {
        let mut cursor = LineCursor::from_text("");
        let err = parse_title(&mut cursor, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EndOfStream));
    }

    #[test]
    fn test_malformed_number_consumes_marker() {
        let mut cursor = LineCursor::from_text("+ title 4294967296:\n  + duration: 00:00:01\n");
        let err = parse_title(&mut cursor, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedTitleNumber { line: 1, .. }));
        assert_eq!(cursor.line_number(), 2);
    }

    #[test]
    fn test_angle_lines_ignored_when_detection_off() {
        let config = ParserConfig::builder().angle_detection(false).build();
        let mut cursor = LineCursor::from_text(BLOCK);
        let title = parse_title(&mut cursor, &config).unwrap();
        assert_eq!(title.angle_count, 0);
        assert_eq!(title.duration, Duration::from_secs(5400));
    }

    #[test]
    fn test_malformed_fields_keep_defaults() {
        let text = "\
+ title 7:
  + duration: 1:xx:00
  + size: 1920x1080
  + autocrop: 0/0/0
  + stream: disc.iso
";
        let mut cursor = LineCursor::from_text(text);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();
        assert_eq!(title.number, 7);
        assert_eq!(title.duration, Duration::ZERO);
        assert_eq!(title.resolution, Resolution::default());
        assert_eq!(title.autocrop, Cropping::default());
        assert_eq!(title.source_name.as_deref(), Some("disc.iso"));
    }

    #[test]
    fn test_truncated_block_is_kept() {
        let text = "+ title 3:\n  + stream: a.mkv\n  + duration: 00:10:00\n";
        let mut cursor = LineCursor::from_text(text);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();
        assert_eq!(title.duration, Duration::from_secs(600));
        assert!(title.chapters.is_empty());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_noise_between_fields_and_sections() {
        let text = "\
+ title 1:
  + vts 1, ttn 1, cells 0->10 (1234 blocks)
  + duration: 00:20:00
  + combing detected, may be interlaced or telecined

  + chapters:
    + 1: duration 00:20:00
  + audio tracks:
  + subtitle tracks:
";
        let mut cursor = LineCursor::from_text(text);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();
        assert_eq!(title.duration, Duration::from_secs(1200));
        assert_eq!(title.chapters.len(), 1);
        assert!(title.audio_tracks.is_empty());
        assert!(title.subtitles.is_empty());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_blank_line_inside_chapter_list() {
        let text = "\
+ title 1:
  + chapters:
    + 1: duration 00:10:00

    + 2: duration 00:10:00
    + 3: duration 00:10:00
  + audio tracks:
    + 1, English (AC3) (2.0 ch)
+ title 2:
";
        let mut cursor = LineCursor::from_text(text);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();
        let indices: Vec<u32> = title.chapters.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(title.audio_tracks.len(), 1);
        assert_eq!(cursor.peek(), Some("+ title 2:"));
    }

    #[test]
    fn test_field_shaped_entry_does_not_end_list() {
        let text = "\
+ title 1:
  + chapters:
    + 1: duration 00:01:00
    + duration: 00:01:00
    + 3: duration 00:01:00
  + audio tracks:
    + 1, English (AC3) (2.0 ch)
  + subtitle tracks:
    + 1, English (iso639-2: eng) (Bitmap)(VOBSUB)
";
        let mut cursor = LineCursor::from_text(text);
        let title = parse_title(&mut cursor, &ParserConfig::default()).unwrap();
        let indices: Vec<u32> = title.chapters.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(title
            .chapters
            .iter()
            .all(|c| c.duration == Some(Duration::from_secs(60))));
        assert_eq!(title.audio_tracks.len(), 1);
        assert_eq!(title.subtitles.len(), 1);
        assert!(cursor.is_at_end());
    }
}
