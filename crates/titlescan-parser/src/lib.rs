//! # titlescan-parser
//!
//! A defensive parser for the title report a media scanner prints after
//! scanning a disc or file.
//!
//! The report is loosely structured text: one `+ title N:` block per title,
//! scalar fields on indented `+` lines, and nested chapter, audio and subtitle
//! lists. This crate turns it into [`Title`] records, keeping everything it
//! can decode and falling back to defaults for the rest.
//!
//! ## Quick Start
//!
//! ```
//! use titlescan_parser::parse;
//! use std::time::Duration;
//!
//! let report = "\
//! + title 1:
//!   + stream: movie.mkv
//!   + duration: 01:30:00
//!   + size: 1920x1080, pixel aspect: 1/1, display aspect: 1.78, 23.976 fps
//!   + autocrop: 0/0/10/10
//! ";
//!
//! let titles = parse(report);
//! assert_eq!(titles.len(), 1);
//! assert_eq!(titles[0].number, 1);
//! assert_eq!(titles[0].source_name.as_deref(), Some("movie.mkv"));
//! assert_eq!(titles[0].duration, Duration::from_secs(5400));
//! ```
//!
//! ## Streaming Input
//!
//! Reports can be read straight from a buffered reader, such as a captured
//! pipe. A read failure is reported together with the titles completed
//! before it:
//!
//! ```
//! use titlescan_parser::{Parser, config::ParserConfig};
//!
//! let config = ParserConfig::builder()
//!     .angle_detection(false)
//!     .skip_preamble(true)
//!     .build();
//!
//! let log = "hb_init: starting libhb thread\n+ title 3:\n  + duration: 00:42:00\n";
//! let titles = Parser::new(config).parse_reader(log.as_bytes()).unwrap();
//! assert_eq!(titles[0].number, 3);
//! ```

pub mod config;
pub mod cursor;
mod error;
pub mod lexer;
pub mod model;
mod parser;
pub mod validate;

// Re-export main types for convenience
pub use cursor::LineCursor;
pub use error::{Error, Result};
pub use model::{
    default_title, format_duration, AudioCodec, AudioTrack, Chapter, Cropping, ParseError,
    PixelAspect, Resolution, Subtitle, SubtitleFormat, SubtitleKind, Title,
};
pub use parser::parse_title;
pub use validate::{validate, ValidationIssue, ISSUE_CODES};

use config::ParserConfig;
use std::io::{self, BufRead};

/// Parse an in-memory report using default settings.
///
/// Text held in memory cannot fail to read, so this never errors; a report
/// without titles yields an empty list.
///
/// # Examples
///
/// ```
/// use titlescan_parser::parse;
///
/// assert!(parse("  + combing detected\n").is_empty());
/// ```
pub fn parse(input: &str) -> Vec<Title> {
    Parser::default().parse(input)
}

/// Parse a report from a buffered reader using default settings.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Title>> {
    Parser::default().parse_reader(reader)
}

/// A configurable report parser.
///
/// ```
/// use titlescan_parser::Parser;
/// use titlescan_parser::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::builder().angle_detection(false).build());
/// let titles = parser.parse("+ title 1:\n  + angle(s) 3\n");
/// assert_eq!(titles[0].angle_count, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an in-memory report.
    pub fn parse(&self, input: &str) -> Vec<Title> {
        let mut cursor = LineCursor::from_text(input);
        // In-memory lines never fail, so only the completed titles can come back.
        parser::parse_titles(&mut cursor, &self.config).unwrap_or_else(Error::into_completed_titles)
    }

    /// Parse a report from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if the reader fails; the titles completed
    /// before the failure are available through [`Error::completed_titles`].
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Title>> {
        let mut cursor = LineCursor::from_reader(reader);
        parser::parse_titles(&mut cursor, &self.config)
    }

    /// Parse a report from any fallible line iterator.
    ///
    /// Lines are pulled one at a time, so a source that produces lines while
    /// a scan is still running is consumed as it goes.
    pub fn parse_lines<I>(&self, lines: I) -> Result<Vec<Title>>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut cursor = LineCursor::new(lines.into_iter());
        parser::parse_titles(&mut cursor, &self.config)
    }
}
