//! Token types for the Logos-based line lexer.

use logos::Logos;

/// Tokens of a single scan report line.
///
/// No two patterns start on the same character. Line classification happens
/// on the resulting token sequence.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Bullet marker that opens every structured line
    #[token("+")]
    Plus,

    /// Label terminator (`duration:`, `title 1:`)
    #[token(":")]
    Colon,

    /// Field separator
    #[token(",")]
    Comma,

    /// Crop and ratio separator
    #[token("/")]
    Slash,

    /// Run of ASCII digits
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'src str),

    /// Anything else up to whitespace or a separator (e.g. `angle(s)`, `x1080`)
    #[regex(r"[^ \t+:,/0-9][^ \t:,/]*", |lex| lex.slice())]
    Word(&'src str),
}

impl<'src> Token<'src> {
    /// True if this is a word equal to `expected`, ignoring ASCII case.
    pub fn is_word(&self, expected: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(expected))
    }
}
