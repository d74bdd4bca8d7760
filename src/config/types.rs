use serde::{Deserialize, Serialize};
use titlescan_parser::config::ParserConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output format for `parse` and `check`
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// List every chapter and track in text output, not just counts
    #[serde(default = "default_tracks")]
    pub tracks: bool,
}

fn default_pretty() -> bool {
    true
}

fn default_tracks() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            tracks: default_tracks(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Issue kinds `check` does not report (e.g. "zero_frame_rate")
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl CheckConfig {
    /// Whether an issue kind is reported.
    pub fn reports(&self, code: &str) -> bool {
        !self.ignore.iter().any(|ignored| ignored == code)
    }
}
