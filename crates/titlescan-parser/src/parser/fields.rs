//! Winnow grammars for field values.
//!
//! Line classification has already happened in the lexer; these grammars only
//! decode the value part of a line. Every public helper returns `None` when
//! the text does not have the expected shape and leaves the decision about
//! defaults to the caller.

use std::str::FromStr;
use std::time::Duration;

use winnow::ascii::{digit1, float, space0, space1, Caseless};
use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated_pair, terminated};
use winnow::error::ContextError;
use winnow::token::{take_till, take_while};
use winnow::{PResult, Parser};

use crate::model::{Cropping, PixelAspect, Resolution};

/// Values carried by a `size:` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Geometry {
    pub resolution: Resolution,
    pub pixel_aspect: PixelAspect,
    pub display_aspect: f64,
    pub frame_rate: f64,
}

/// A `NNNNHz` or `NNNNbps` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rate {
    SampleRate(u32),
    Bitrate(u32),
}

/// One comma-separated component of a chapter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChapterPart {
    Cells(u32, u32),
    Blocks(u64),
    Duration(Duration),
}

/// An entry body split into its leading label, bracketed groups, and the
/// comma-separated text outside any group.
///
/// `English (AC3) (5.1 ch), 48000Hz` has label `English`, groups
/// `["AC3", "5.1 ch"]` and extras `["48000Hz"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Described<'s> {
    pub label: &'s str,
    pub groups: Vec<&'s str>,
    pub extras: Vec<&'s str>,
}

enum Piece<'s> {
    Group(&'s str),
    Text(&'s str),
}

/// Unsigned decimal. Leading zeros are allowed (`01:30:00`, `title 01:`);
/// values that overflow `T` fail.
fn uint<T: FromStr>(input: &mut &str) -> PResult<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    digit1.try_map(|digits: &str| digits.parse::<T>()).parse_next(input)
}

fn title_marker(input: &mut &str) -> PResult<u32> {
    delimited(
        ('+', space0, Caseless("title"), space1),
        uint,
        (space0, ':'),
    )
    .parse_next(input)
}

fn sexagesimal(input: &mut &str) -> PResult<u64> {
    uint::<u64>
        .verify(|n: &u64| *n < 60)
        .parse_next(input)
}

fn hms(input: &mut &str) -> PResult<Duration> {
    (uint, preceded(':', sexagesimal), preceded(':', sexagesimal))
        .map(|(hours, minutes, seconds): (u32, u64, u64)| {
            Duration::from_secs(u64::from(hours) * 3600 + minutes * 60 + seconds)
        })
        .parse_next(input)
}

fn label<'s>(name: &'static str) -> impl Parser<&'s str, (), ContextError> {
    (',', space0, Caseless(name), space0, ':', space0).void()
}

fn geometry(input: &mut &str) -> PResult<Geometry> {
    (
        separated_pair(uint, alt(('x', 'X')), uint),
        preceded(
            label("pixel aspect"),
            separated_pair(uint, '/', uint),
        ),
        preceded(label("display aspect"), float),
        delimited((',', space0), float, (space0, Caseless("fps"))),
    )
        .map(
            |((width, height), (num, den), display_aspect, frame_rate)| Geometry {
                resolution: Resolution::new(width, height),
                pixel_aspect: PixelAspect::new(num, den),
                display_aspect,
                frame_rate,
            },
        )
        .parse_next(input)
}

fn crop(input: &mut &str) -> PResult<Cropping> {
    (
        uint,
        preceded('/', uint),
        preceded('/', uint),
        preceded('/', uint),
    )
        .map(|(top, bottom, left, right)| Cropping::new(top, bottom, left, right))
        .parse_next(input)
}

fn count(input: &mut &str) -> PResult<u32> {
    uint.parse_next(input)
}

fn entry_index(input: &mut &str) -> PResult<u32> {
    terminated(uint, (space0, alt((',', ':')))).parse_next(input)
}

fn group<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((
        delimited('(', take_till(0.., ')'), ')'),
        delimited('[', take_till(0.., ']'), ']'),
    ))
    .parse_next(input)
}

fn piece<'s>(input: &mut &'s str) -> PResult<Piece<'s>> {
    alt((
        group.map(Piece::Group),
        take_till(1.., ['(', '[']).map(Piece::Text),
    ))
    .parse_next(input)
}

fn leading_label<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_till(0.., ['(', '[', ',']).parse_next(input)
}

fn remainder<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(0.., |_c: char| true).parse_next(input)
}

fn described<'s>(input: &mut &'s str) -> PResult<Described<'s>> {
    let label = leading_label(input)?;
    let pieces: Vec<Piece<'s>> = repeat(0.., piece).parse_next(input)?;
    let leftover = remainder(input)?;

    let mut groups = Vec::new();
    let mut extras = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Group(g) => groups.push(g.trim()),
            Piece::Text(t) => extras.extend(segments(t)),
        }
    }
    extras.extend(segments(leftover));

    Ok(Described {
        label: label.trim(),
        groups,
        extras,
    })
}

fn rate(input: &mut &str) -> PResult<Rate> {
    separated_pair(
        uint,
        space0,
        alt((
            Caseless("khz"),
            Caseless("hz"),
            Caseless("kbps"),
            Caseless("bps"),
        )),
    )
    .map(|(value, unit): (u32, &str)| match unit.to_ascii_lowercase().as_str() {
        "khz" => Rate::SampleRate(value.saturating_mul(1000)),
        "hz" => Rate::SampleRate(value),
        "kbps" => Rate::Bitrate(value.saturating_mul(1000)),
        _ => Rate::Bitrate(value),
    })
    .parse_next(input)
}

fn iso_code<'s>(input: &mut &'s str) -> PResult<&'s str> {
    preceded(
        (Caseless("iso639-2"), space0, ':', space0),
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
    )
    .parse_next(input)
}

fn channel_layout(input: &mut &str) -> PResult<()> {
    (digit1, opt(('.', digit1)), space0, Caseless("ch"))
        .void()
        .parse_next(input)
}

fn cells(input: &mut &str) -> PResult<(u32, u32)> {
    preceded(
        (Caseless("cells"), space1),
        separated_pair(uint, (space0, "->", space0), uint),
    )
    .parse_next(input)
}

fn blocks(input: &mut &str) -> PResult<u64> {
    terminated(
        uint,
        (space1, alt((Caseless("blocks"), Caseless("block")))),
    )
    .parse_next(input)
}

fn chapter_duration(input: &mut &str) -> PResult<Duration> {
    preceded(
        (Caseless("duration"), space0, opt(':'), space0),
        hms,
    )
    .parse_next(input)
}

fn chapter_part(input: &mut &str) -> PResult<ChapterPart> {
    alt((
        cells.map(|(first, last)| ChapterPart::Cells(first, last)),
        blocks.map(ChapterPart::Blocks),
        chapter_duration.map(ChapterPart::Duration),
    ))
    .parse_next(input)
}

fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Run a grammar over the trimmed text, requiring it to consume everything.
fn whole<'s, O>(mut parser: impl Parser<&'s str, O, ContextError>, text: &'s str) -> Option<O> {
    parser.parse(text.trim()).ok()
}

/// Number of a `+ title N:` marker. Text after the colon is ignored.
pub(crate) fn parse_title_number(text: &str) -> Option<u32> {
    let mut input = text.trim();
    title_marker(&mut input).ok()
}

/// `HH:MM:SS`
pub(crate) fn parse_duration(text: &str) -> Option<Duration> {
    whole(hms, text)
}

/// `WxH, pixel aspect: N/M, display aspect: D.D, F.F fps`
pub(crate) fn parse_geometry(text: &str) -> Option<Geometry> {
    whole(geometry, text)
}

/// `T/B/L/R`
pub(crate) fn parse_crop(text: &str) -> Option<Cropping> {
    whole(crop, text)
}

/// A bare non-negative integer.
pub(crate) fn parse_count(text: &str) -> Option<u32> {
    whole(count, text)
}

/// Split an entry line (without its `+`) into its own index and the body.
///
/// A leading token that cannot be a label (`?, English`, `#3: cells`) is taken
/// for a broken index and dropped. Word tokens such as `English, 48000Hz` are
/// kept as part of the body. Either way `None` is returned so the caller can
/// fall back to the entry's position.
pub(crate) fn split_entry(text: &str) -> (Option<u32>, &str) {
    let text = text.trim();
    let mut input = text;
    if let Ok(index) = entry_index(&mut input) {
        return (Some(index), input.trim());
    }
    match text.split_once(|c: char| c == ',' || c == ':') {
        Some((token, body)) if !token.is_empty() && !could_be_label(token) => (None, body.trim()),
        _ => (None, text),
    }
}

fn could_be_label(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
}

/// Break an entry body into label, groups and extras. Never fails.
pub(crate) fn parse_described(text: &str) -> Described<'_> {
    let mut input = text.trim();
    described(&mut input).unwrap_or_default()
}

/// `48000Hz`, `448000bps`, `448 kbps`
pub(crate) fn parse_rate(text: &str) -> Option<Rate> {
    whole(rate, text)
}

/// `iso639-2: eng`
pub(crate) fn parse_iso_code(text: &str) -> Option<&str> {
    whole(iso_code, text)
}

/// True for `5.1 ch`, `2.0 ch`, `1 ch`.
pub(crate) fn is_channel_layout(text: &str) -> bool {
    whole(channel_layout, text).is_some()
}

/// `cells A->B`, `N blocks` or `duration HH:MM:SS`.
pub(crate) fn parse_chapter_part(text: &str) -> Option<ChapterPart> {
    whole(chapter_part, text)
}
