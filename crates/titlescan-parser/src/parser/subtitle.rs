//! Subtitle list parsing.

use std::io;

use super::fields;
use super::{collect_entries, EntryLine};
use crate::cursor::LineCursor;
use crate::model::{Subtitle, SubtitleFormat, SubtitleKind};

/// Consume the subtitle entries following a `+ subtitle tracks:` header.
pub(crate) fn parse_list<I>(cursor: &mut LineCursor<I>, header_indent: usize) -> Vec<Subtitle>
where
    I: Iterator<Item = io::Result<String>>,
{
    collect_entries(cursor, header_indent, parse_entry)
}

/// Decode one entry such as `1, English (iso639-2: eng) (Bitmap)(VOBSUB)`.
fn parse_entry(entry: &EntryLine<'_>) -> Subtitle {
    let described = fields::parse_described(entry.body);
    let mut subtitle = Subtitle {
        index: entry.index,
        language: described.label.to_string(),
        ..Default::default()
    };

    for group in &described.groups {
        if let Some(code) = fields::parse_iso_code(group) {
            subtitle.iso639_2 = Some(code.to_string());
        } else if let Ok(kind) = group.parse::<SubtitleKind>() {
            subtitle.kind = kind;
        } else {
            let format = SubtitleFormat::classify(group);
            // A recognised format replaces an earlier unrecognised one.
            if subtitle.format_name.is_none()
                || (subtitle.format == SubtitleFormat::Other && format != SubtitleFormat::Other)
            {
                subtitle.format_name = Some(group.to_string());
                subtitle.format = format;
            }
        }
    }

    if subtitle.kind == SubtitleKind::Unknown {
        subtitle.kind = subtitle.format.kind();
    }
    subtitle
}
