//! Logos-based line lexer for scan reports.
//!
//! Each report line is tokenized with the [logos](https://docs.rs/logos)
//! generated [`Token`] set, then classified into a [`LineKind`] by the token
//! sequence it starts with. Indentation is measured separately because it is
//! what separates list entries from the title-level lines around them.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Classification of a single report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `+ title N:`
    Title,
    /// `+ Main Feature`
    MainFeature,
    /// `+ stream: NAME`
    Stream,
    /// `+ angle(s) N`
    Angles,
    /// `+ duration: HH:MM:SS`
    Duration,
    /// `+ size: WxH, pixel aspect: N/M, display aspect: D, F fps`
    Geometry,
    /// `+ autocrop: T/B/L/R`
    Autocrop,
    /// `+ chapters:`
    Chapters,
    /// `+ audio tracks:`
    AudioTracks,
    /// `+ subtitle tracks:`
    SubtitleTracks,
    /// Scanner diagnostics such as `+ combing detected, ...`,
    /// `+ vts 1, ttn 1, ...` or `+ support opencl: no`
    Diagnostic,
    /// Any other `+` line, usually a list entry
    Bullet,
    /// Text without a bullet marker
    Text,
    /// Empty or whitespace-only line
    Blank,
}

impl LineKind {
    /// True for list section headers.
    pub fn is_section_header(&self) -> bool {
        matches!(
            self,
            LineKind::Chapters | LineKind::AudioTracks | LineKind::SubtitleTracks
        )
    }
}

/// A classified report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLine<'a> {
    /// Width of the leading whitespace.
    pub indent: usize,
    /// What the line is.
    pub kind: LineKind,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
    /// What follows the recognised prefix, trimmed. For `Bullet` lines this is
    /// everything after the `+`; for `Text` and `Blank` it equals `text`.
    pub rest: &'a str,
}

impl<'a> ScanLine<'a> {
    /// Classify a raw line.
    pub fn classify(raw: &'a str) -> Self {
        let text = raw.trim();
        let indent = raw.len() - raw.trim_start().len();

        if text.is_empty() {
            return Self {
                indent,
                kind: LineKind::Blank,
                text,
                rest: text,
            };
        }

        let lexer = Lexer::new(text);
        let (kind, prefix_end) = classify_tokens(lexer.tokens());
        Self {
            indent,
            kind,
            text,
            rest: text[prefix_end..].trim(),
        }
    }

    /// True when the line opens with a `+` marker.
    pub fn is_bullet(&self) -> bool {
        !matches!(self.kind, LineKind::Text | LineKind::Blank)
    }
}

/// Match the leading tokens against the known line shapes.
///
/// Returns the kind and the byte offset where the value part begins.
fn classify_tokens(tokens: &[(Token<'_>, Range<usize>)]) -> (LineKind, usize) {
    let Some((Token::Plus, plus)) = tokens.first() else {
        return (LineKind::Text, 0);
    };
    let toks: Vec<&Token<'_>> = tokens.iter().take(4).map(|(t, _)| t).collect();
    let end_of = |i: usize| tokens[i].1.end;

    match toks.as_slice() {
        [_, w, Token::Number(_), Token::Colon, ..] if w.is_word("title") => {
            (LineKind::Title, end_of(3))
        }
        [_, a, b, ..] if a.is_word("main") && b.is_word("feature") => {
            (LineKind::MainFeature, end_of(2))
        }
        [_, a, b, Token::Colon, ..] if a.is_word("audio") && b.is_word("tracks") => {
            (LineKind::AudioTracks, end_of(3))
        }
        [_, a, b, Token::Colon, ..] if a.is_word("subtitle") && b.is_word("tracks") => {
            (LineKind::SubtitleTracks, end_of(3))
        }
        [_, w, ..] if w.is_word("angle(s)") => (LineKind::Angles, end_of(1)),
        [_, a, b, ..] if a.is_word("combing") && b.is_word("detected") => {
            (LineKind::Diagnostic, plus.end)
        }
        [_, a, Token::Number(_), ..] if a.is_word("vts") => (LineKind::Diagnostic, plus.end),
        [_, a, Token::Word(_), Token::Colon] if a.is_word("support") => {
            (LineKind::Diagnostic, plus.end)
        }
        [_, w, Token::Colon, ..] => {
            let kind = if w.is_word("stream") {
                LineKind::Stream
            } else if w.is_word("duration") {
                LineKind::Duration
            } else if w.is_word("size") {
                LineKind::Geometry
            } else if w.is_word("autocrop") {
                LineKind::Autocrop
            } else if w.is_word("chapters") {
                LineKind::Chapters
            } else {
                return (LineKind::Bullet, plus.end);
            };
            (kind, end_of(2))
        }
        _ => (LineKind::Bullet, plus.end),
    }
}

/// A lexer that tokenizes one report line using Logos.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    ///
    /// Tokenizes the entire input immediately. Bytes no token accepts are
    /// dropped.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens, input }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }
}
