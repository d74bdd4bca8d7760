//! Reading scan reports from files or standard input.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use titlescan_parser::{Parser, Title};

/// Parse the report at `path`, where `-` stands for standard input.
///
/// Lines are parsed as they are read, so a report piped from a running scan
/// is consumed incrementally.
pub fn read_titles(path: &Path, parser: &Parser) -> Result<Vec<Title>> {
    let result = if path == Path::new("-") {
        tracing::debug!("Reading scan report from stdin");
        parser.parse_reader(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open scan report: {:?}", path))?;
        tracing::debug!("Reading scan report from {:?}", path);
        parser.parse_reader(BufReader::new(file))
    };

    match result {
        Ok(titles) => {
            tracing::info!("Found {} title(s)", titles.len());
            Ok(titles)
        }
        Err(err) => {
            tracing::warn!(
                "Scan report ended early after {} complete title(s)",
                err.completed_titles().len()
            );
            Err(err).with_context(|| format!("Failed to read scan report: {:?}", path))
        }
    }
}
