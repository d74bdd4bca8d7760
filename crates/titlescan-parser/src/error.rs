//! Error types for titlescan-parser.

use crate::model::Title;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a scan report.
///
/// Only [`Error::Stream`] ever escapes the collection driver. The other
/// variants are returned by the block-level entry points and are recovered
/// from internally when a whole report is parsed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The current line does not open a title block.
    #[error("line {line} is not a title marker")]
    NotATitleBlock { line: usize },

    /// The title marker matched but its number could not be decoded.
    #[error("malformed title number on line {line}: {text:?}")]
    MalformedTitleNumber { line: usize, text: String },

    /// A recognised field line carried a value that could not be decoded.
    #[error("malformed {field} on line {line}: {text:?}")]
    MalformedField {
        field: &'static str,
        line: usize,
        text: String,
    },

    /// The line source ran out before a title block could start.
    #[error("unexpected end of scan output")]
    EndOfStream,

    /// The line source itself failed. Titles completed before the failure
    /// are carried along so callers can still use them.
    #[error("failed to read scan output: {source}")]
    Stream {
        #[source]
        source: std::io::Error,
        completed: Vec<Title>,
    },
}

impl Error {
    /// Create a malformed field error.
    pub fn malformed_field(field: &'static str, line: usize, text: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            line,
            text: text.into(),
        }
    }

    /// Create a stream failure error.
    pub fn stream(source: std::io::Error, completed: Vec<Title>) -> Self {
        Self::Stream { source, completed }
    }

    /// Titles that were fully parsed before a stream failure.
    ///
    /// Empty for every other variant.
    pub fn completed_titles(&self) -> &[Title] {
        match self {
            Self::Stream { completed, .. } => completed,
            _ => &[],
        }
    }

    /// Consume the error, keeping the titles completed before a stream failure.
    pub fn into_completed_titles(self) -> Vec<Title> {
        match self {
            Self::Stream { completed, .. } => completed,
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotATitleBlock { line: 3 };
        assert_eq!(err.to_string(), "line 3 is not a title marker");

        let err = Error::malformed_field("duration", 7, "1:xx:00");
        assert_eq!(
            err.to_string(),
            "malformed duration on line 7: \"1:xx:00\""
        );

        let err = Error::EndOfStream;
        assert_eq!(err.to_string(), "unexpected end of scan output");
    }

    #[test]
    fn test_stream_error_keeps_titles() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let title = Title {
            number: 4,
            ..Default::default()
        };
        let err = Error::stream(io_err, vec![title]);

        assert_eq!(err.completed_titles().len(), 1);
        assert!(err.to_string().contains("pipe closed"));
        let titles = err.into_completed_titles();
        assert_eq!(titles[0].number, 4);
    }

    #[test]
    fn test_non_stream_errors_have_no_titles() {
        let err = Error::MalformedTitleNumber {
            line: 1,
            text: "99999999999".to_string(),
        };
        assert!(err.completed_titles().is_empty());
        assert!(err.into_completed_titles().is_empty());
    }
}
