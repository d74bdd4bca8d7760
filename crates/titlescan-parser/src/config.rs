//! Parser configuration.

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use titlescan_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .angle_detection(false)
///     .build();
/// assert!(!config.angle_detection);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Whether the scanner was run with angle detection.
    ///
    /// When disabled, `+ angle(s)` lines are consumed and ignored and every
    /// title reports an angle count of zero.
    /// Default: true
    pub angle_detection: bool,

    /// Skip every line before the first title marker.
    ///
    /// Raw scanner logs usually open with a block of unindented diagnostic
    /// lines that would otherwise end the title collection immediately.
    /// Default: false
    pub skip_preamble: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            angle_detection: true,
            skip_preamble: false,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    angle_detection: Option<bool>,
    skip_preamble: Option<bool>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether angle lines are honoured.
    ///
    /// Default: true
    pub fn angle_detection(mut self, enabled: bool) -> Self {
        self.angle_detection = Some(enabled);
        self
    }

    /// Set whether lines before the first title marker are skipped.
    ///
    /// Default: false
    pub fn skip_preamble(mut self, enabled: bool) -> Self {
        self.skip_preamble = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            angle_detection: self.angle_detection.unwrap_or(true),
            skip_preamble: self.skip_preamble.unwrap_or(false),
        }
    }
}
