//! Line-driven parser for scan reports.
//!
//! The driver walks the report one line at a time through a [`LineCursor`].
//! Title markers hand control to the title block parser, which in turn hands
//! each list section to the chapter, audio or subtitle parser. Every parser
//! returns with the cursor on the first line it did not recognise.

mod audio;
mod chapter;
pub(crate) mod fields;
mod subtitle;
mod title;

pub use title::parse_title;

use std::io;

use tracing::{debug, trace, warn};

use crate::config::ParserConfig;
use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::lexer::{LineKind, ScanLine};
use crate::model::Title;

/// True for lines that belong to no block: scanner diagnostics such as
/// `+ combing detected`, other indented `+` or text lines, and blank lines.
pub(crate) fn is_noise(line: &ScanLine<'_>) -> bool {
    match line.kind {
        LineKind::Blank | LineKind::Diagnostic => true,
        LineKind::Bullet | LineKind::Text => line.indent > 0,
        _ => false,
    }
}

/// An entry line of a list section, split into index and body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryLine<'a> {
    /// 1-based line number in the report.
    pub line: usize,
    /// The entry's own index, or its position in the list when the line's
    /// index token is missing or malformed.
    pub index: u32,
    /// Text after the index separator.
    pub body: &'a str,
}

/// Consume the entries of a list section.
///
/// Entries are `+` lines indented deeper than their header, whatever their
/// text looks like. Blank lines, diagnostics and unmarked text nested under
/// the header are skipped. Collection stops at the first line that is not
/// nested, or at a title marker or section header, which is left on the
/// cursor.
///
/// An entry without a usable index of its own is numbered after the entry
/// before it.
pub(crate) fn collect_entries<I, T>(
    cursor: &mut LineCursor<I>,
    header_indent: usize,
    mut build: impl FnMut(&EntryLine<'_>) -> T,
) -> Vec<T>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut entries = Vec::new();
    let mut last_index: Option<u32> = None;
    loop {
        let line_no = cursor.line_number();
        let Some(line) = cursor.peek_line() else {
            break;
        };
        let nested = line.indent > header_indent;

        let skip = match line.kind {
            LineKind::Blank => true,
            LineKind::Diagnostic | LineKind::Text => nested,
            _ => false,
        };
        if skip {
            trace!(line = line_no, text = line.text, "Skipping noise inside list");
            cursor.advance();
            continue;
        }
        if !nested
            || !line.is_bullet()
            || line.kind == LineKind::Title
            || line.kind.is_section_header()
        {
            break;
        }

        let text = line.text.strip_prefix('+').unwrap_or(line.text);
        let (own_index, body) = fields::split_entry(text);
        let index = own_index.unwrap_or_else(|| {
            let next = last_index.map_or(1, |i| i.saturating_add(1));
            debug!(
                line = line_no,
                index = next,
                "Entry has no usable index, numbering after previous"
            );
            next
        });
        last_index = Some(index);

        entries.push(build(&EntryLine {
            line: line_no,
            index,
            body,
        }));
        cursor.advance();
    }
    entries
}

/// Collect every title in the report.
///
/// Blank lines and indented lines outside a title block are skipped; this
/// includes the remains of a block whose marker could not be decoded. The
/// first unindented line that is not a title marker ends the collection,
/// unless `skip_preamble` is set and no title has been seen yet.
///
/// A read failure in the line source aborts with [`Error::Stream`], carrying
/// the titles completed before the failure. The title being read when the
/// source failed is discarded.
pub(crate) fn parse_titles<I>(cursor: &mut LineCursor<I>, config: &ParserConfig) -> Result<Vec<Title>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut titles = Vec::new();
    let mut seen_marker = false;

    loop {
        let line_no = cursor.line_number();
        let Some(line) = cursor.peek_line() else {
            break;
        };
        let kind = line.kind;
        let stray = is_noise(&line) || (line.indent > 0 && kind != LineKind::Title);

        if kind == LineKind::Title {
            seen_marker = true;
            match parse_title(cursor, config) {
                Ok(title) if cursor.has_failed() => {
                    debug!(title = title.number, "Discarding title cut short by read failure");
                    break;
                }
                Ok(title) => titles.push(title),
                Err(err) => warn!(error = %err, "Skipping title block"),
            }
        } else if stray || (config.skip_preamble && !seen_marker) {
            trace!(line = line_no, "Skipping line");
            cursor.advance();
        } else {
            debug!(line = line_no, "End of title listing");
            break;
        }
    }

    if let Some(source) = cursor.take_failure() {
        return Err(Error::stream(source, titles));
    }
    debug!(count = titles.len(), "Parsed scan report");
    Ok(titles)
}
