//! Rendering parsed titles and validation issues.

use crate::config::OutputConfig;
use std::io::{self, Write};
use titlescan_parser::{format_duration, AudioTrack, Chapter, Subtitle, Title, ValidationIssue};

/// Write titles in human-readable form.
pub fn write_titles<W: Write>(out: &mut W, titles: &[Title], options: &OutputConfig) -> io::Result<()> {
    if titles.is_empty() {
        writeln!(out, "No titles found")?;
        return Ok(());
    }

    for (i, title) in titles.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_title(out, title, options.tracks)?;
    }
    Ok(())
}

fn write_title<W: Write>(out: &mut W, title: &Title, tracks: bool) -> io::Result<()> {
    write!(out, "Title {}", title.number)?;
    if title.main_feature {
        write!(out, " [main feature]")?;
    }
    writeln!(out)?;

    if let Some(ref source) = title.source_name {
        writeln!(out, "  Source: {}", source)?;
    }
    writeln!(out, "  Duration: {}", format_duration(title.duration))?;
    if title.resolution.is_known() {
        writeln!(
            out,
            "  Size: {}, pixel aspect {}, display aspect {:.2}, {:.3} fps",
            title.resolution, title.pixel_aspect, title.display_aspect, title.frame_rate
        )?;
    } else {
        writeln!(out, "  Size: unknown")?;
    }
    if !title.autocrop.is_zero() {
        writeln!(
            out,
            "  Autocrop: {} ({})",
            title.autocrop,
            title.cropped_resolution()
        )?;
    }
    if title.angle_count > 0 {
        writeln!(out, "  Angles: {}", title.angle_count)?;
    }

    writeln!(out, "  Chapters: {}", title.chapters.len())?;
    if tracks {
        for chapter in &title.chapters {
            writeln!(out, "    {}", chapter_line(chapter))?;
        }
    }

    writeln!(out, "  Audio tracks: {}", title.audio_tracks.len())?;
    if tracks {
        for track in &title.audio_tracks {
            writeln!(out, "    {}", audio_line(track))?;
        }
    }

    writeln!(out, "  Subtitles: {}", title.subtitles.len())?;
    if tracks {
        for subtitle in &title.subtitles {
            writeln!(out, "    {}", subtitle_line(subtitle))?;
        }
    }
    Ok(())
}

fn chapter_line(chapter: &Chapter) -> String {
    let mut line = format!("{}.", chapter.index);
    match chapter.duration {
        Some(duration) => line.push_str(&format!(" {}", format_duration(duration))),
        None => line.push_str(" --:--:--"),
    }
    if let Some(ref name) = chapter.name {
        line.push_str(&format!(" {}", name));
    }
    line
}

fn audio_line(track: &AudioTrack) -> String {
    let mut line = format!("{}. {}", track.index, track.language);
    match track.codec_name {
        Some(ref name) => line.push_str(&format!(" {}", name)),
        None => line.push_str(&format!(" {}", track.codec)),
    }
    if let Some(ref layout) = track.channel_layout {
        line.push_str(&format!(" {}", layout));
    }
    if let Some(ref iso) = track.iso639_2 {
        line.push_str(&format!(" ({})", iso));
    }
    if let Some(rate) = track.sample_rate {
        line.push_str(&format!(", {}Hz", rate));
    }
    if let Some(bitrate) = track.bitrate {
        line.push_str(&format!(", {}kbps", bitrate / 1000));
    }
    if let Some(ref description) = track.description {
        line.push_str(&format!(" [{}]", description));
    }
    line
}

fn subtitle_line(subtitle: &Subtitle) -> String {
    let mut line = format!("{}. {}", subtitle.index, subtitle.language);
    if let Some(ref iso) = subtitle.iso639_2 {
        line.push_str(&format!(" ({})", iso));
    }
    match subtitle.format_name {
        Some(ref name) => line.push_str(&format!(" {}", name)),
        None => line.push_str(&format!(" {}", subtitle.format)),
    }
    line.push_str(&format!(" {:?}", subtitle.kind));
    line
}

/// Write validation issues, one per line.
pub fn write_issues<W: Write>(out: &mut W, issues: &[ValidationIssue]) -> io::Result<()> {
    if issues.is_empty() {
        writeln!(out, "✓ No issues found")?;
        return Ok(());
    }
    for issue in issues {
        writeln!(out, "✗ {} [{}]", issue, issue.code())?;
    }
    Ok(())
}

/// Serialize titles as JSON.
pub fn titles_json(titles: &[Title], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(titles)
    } else {
        serde_json::to_string(titles)
    }
}

/// Serialize a check result as JSON.
pub fn check_json(
    titles: &[Title],
    issues: &[ValidationIssue],
    pretty: bool,
) -> serde_json::Result<String> {
    let value = serde_json::json!({
        "titles": titles.len(),
        "issues": issues,
    });
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
