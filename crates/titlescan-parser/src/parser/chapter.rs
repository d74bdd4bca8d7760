//! Chapter list parsing.

use std::io;

use tracing::warn;

use super::fields::{self, ChapterPart};
use super::{collect_entries, EntryLine};
use crate::cursor::LineCursor;
use crate::error::Error;
use crate::model::Chapter;

/// Consume the chapter entries following a `+ chapters:` header.
pub(crate) fn parse_list<I>(cursor: &mut LineCursor<I>, header_indent: usize) -> Vec<Chapter>
where
    I: Iterator<Item = io::Result<String>>,
{
    collect_entries(cursor, header_indent, parse_entry)
}

/// Decode one entry such as `1: cells 0->0, 12345 blocks, duration 00:05:00`.
///
/// Components are comma separated and may come in any order. Anything that
/// is not a known component becomes part of the chapter name.
fn parse_entry(entry: &EntryLine<'_>) -> Chapter {
    let mut chapter = Chapter {
        index: entry.index,
        ..Default::default()
    };
    let mut name_parts = Vec::new();

    for part in entry.body.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match fields::parse_chapter_part(part) {
            Some(ChapterPart::Cells(first, last)) => chapter.cells = Some((first, last)),
            Some(ChapterPart::Blocks(blocks)) => chapter.blocks = Some(blocks),
            Some(ChapterPart::Duration(duration)) => chapter.duration = Some(duration),
            None if starts_with_ignore_case(part, "duration") => {
                let err = Error::malformed_field("chapter duration", entry.line, part);
                warn!(chapter = entry.index, error = %err, "Ignoring chapter duration");
            }
            None => name_parts.push(part),
        }
    }

    if !name_parts.is_empty() {
        chapter.name = Some(name_parts.join(", "));
    }
    chapter
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
