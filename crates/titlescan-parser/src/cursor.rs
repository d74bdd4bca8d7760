//! Forward-only line cursor with one line of lookahead.
//!
//! The cursor pulls lines lazily from any iterator of `io::Result<String>`,
//! so a caller streaming a scanner's output only ever blocks inside its own
//! iterator. A read failure is recorded and surfaces as end of stream; the
//! driver checks [`LineCursor::take_failure`] to tell the two apart.

use crate::lexer::ScanLine;
use std::io::{self, BufRead};

/// A peekable cursor over scan output lines.
pub struct LineCursor<I> {
    lines: I,
    peeked: Option<String>,
    failure: Option<io::Error>,
    exhausted: bool,
    consumed: usize,
}

impl<I> LineCursor<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Wrap a fallible line iterator.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            peeked: None,
            failure: None,
            exhausted: false,
            consumed: 0,
        }
    }

    fn fill(&mut self) {
        if self.peeked.is_some() || self.exhausted {
            return;
        }
        match self.lines.next() {
            Some(Ok(line)) => self.peeked = Some(line),
            Some(Err(e)) => {
                self.failure = Some(e);
                self.exhausted = true;
            }
            None => self.exhausted = true,
        }
    }

    /// Look at the next line without consuming it.
    pub fn peek(&mut self) -> Option<&str> {
        self.fill();
        self.peeked.as_deref()
    }

    /// Classify the next line without consuming it.
    pub fn peek_line(&mut self) -> Option<ScanLine<'_>> {
        self.peek().map(ScanLine::classify)
    }

    /// Consume and return the next line.
    pub fn next_line(&mut self) -> Option<String> {
        self.fill();
        let line = self.peeked.take()?;
        self.consumed += 1;
        Some(line)
    }

    /// Consume the next line, discarding it.
    pub fn advance(&mut self) {
        let _ = self.next_line();
    }

    /// True once every line has been consumed or the source failed.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// 1-based number of the line [`peek`](Self::peek) would return.
    pub fn line_number(&self) -> usize {
        self.consumed + 1
    }

    /// True if the underlying source reported an error.
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Take the recorded source error, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

impl<'a> LineCursor<std::iter::Map<std::str::Lines<'a>, fn(&'a str) -> io::Result<String>>> {
    /// Cursor over an in-memory report. Never fails.
    pub fn from_text(text: &'a str) -> Self {
        fn owned(line: &str) -> io::Result<String> {
            Ok(line.to_string())
        }
        LineCursor::new(text.lines().map(owned as fn(&'a str) -> io::Result<String>))
    }
}

impl<R: BufRead> LineCursor<io::Lines<R>> {
    /// Cursor over a buffered reader, such as a captured pipe.
    pub fn from_reader(reader: R) -> Self {
        LineCursor::new(reader.lines())
    }
}
