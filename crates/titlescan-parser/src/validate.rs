//! Consistency checks over parsed titles.
//!
//! Parsing never rejects a title for implausible values; it keeps what the
//! scanner printed. [`validate`] runs afterwards and reports what looks wrong
//! so callers can decide whether to trust a title.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::model::{format_duration, Cropping, Resolution, Title};

/// Slack allowed per chapter when comparing chapter lengths with the title
/// length, since the scanner rounds every chapter to whole seconds.
const CHAPTER_ROUNDING: Duration = Duration::from_secs(1);

/// A problem found in a parsed title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "issue", rename_all = "snake_case"))]
pub enum ValidationIssue {
    /// The crop margins leave no picture.
    CropExceedsFrame {
        title: u32,
        crop: Cropping,
        resolution: Resolution,
    },
    /// No usable frame size was reported.
    MissingResolution { title: u32 },
    /// The title has no length.
    ZeroDuration { title: u32 },
    /// A frame size was reported without a frame rate.
    ZeroFrameRate { title: u32 },
    /// The same title number appears more than once.
    DuplicateTitleNumber { title: u32 },
    /// The chapters add up to more than the title.
    ChaptersExceedDuration {
        title: u32,
        chapters: Duration,
        duration: Duration,
    },
}

impl ValidationIssue {
    /// Number of the title the issue belongs to.
    pub fn title(&self) -> u32 {
        match self {
            Self::CropExceedsFrame { title, .. }
            | Self::MissingResolution { title }
            | Self::ZeroDuration { title }
            | Self::ZeroFrameRate { title }
            | Self::DuplicateTitleNumber { title }
            | Self::ChaptersExceedDuration { title, .. } => *title,
        }
    }

    /// Stable snake_case name of the issue kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CropExceedsFrame { .. } => "crop_exceeds_frame",
            Self::MissingResolution { .. } => "missing_resolution",
            Self::ZeroDuration { .. } => "zero_duration",
            Self::ZeroFrameRate { .. } => "zero_frame_rate",
            Self::DuplicateTitleNumber { .. } => "duplicate_title_number",
            Self::ChaptersExceedDuration { .. } => "chapters_exceed_duration",
        }
    }
}

/// Every value [`ValidationIssue::code`] can return.
pub const ISSUE_CODES: &[&str] = &[
    "crop_exceeds_frame",
    "missing_resolution",
    "zero_duration",
    "zero_frame_rate",
    "duplicate_title_number",
    "chapters_exceed_duration",
];

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CropExceedsFrame {
                title,
                crop,
                resolution,
            } => write!(f, "title {title}: autocrop {crop} exceeds frame {resolution}"),
            Self::MissingResolution { title } => write!(f, "title {title}: no resolution"),
            Self::ZeroDuration { title } => write!(f, "title {title}: zero duration"),
            Self::ZeroFrameRate { title } => write!(f, "title {title}: zero frame rate"),
            Self::DuplicateTitleNumber { title } => {
                write!(f, "title {title}: number appears more than once")
            }
            Self::ChaptersExceedDuration {
                title,
                chapters,
                duration,
            } => write!(
                f,
                "title {title}: chapters total {} but title lasts {}",
                format_duration(*chapters),
                format_duration(*duration)
            ),
        }
    }
}

/// Check every title, returning the issues in title order.
///
/// The titles are not modified. An empty result means nothing looked wrong.
pub fn validate(titles: &[Title]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for title in titles {
        let number = title.number;

        if !seen.insert(number) && reported.insert(number) {
            issues.push(ValidationIssue::DuplicateTitleNumber { title: number });
        }

        if title.resolution.is_known() {
            if !title.autocrop.is_zero() && !title.autocrop.fits_within(title.resolution) {
                issues.push(ValidationIssue::CropExceedsFrame {
                    title: number,
                    crop: title.autocrop,
                    resolution: title.resolution,
                });
            }
            if title.frame_rate <= 0.0 {
                issues.push(ValidationIssue::ZeroFrameRate { title: number });
            }
        } else {
            issues.push(ValidationIssue::MissingResolution { title: number });
        }

        if title.duration.is_zero() {
            issues.push(ValidationIssue::ZeroDuration { title: number });
        } else {
            let chapters = title.chapter_duration();
            let slack = CHAPTER_ROUNDING * u32::try_from(title.chapters.len()).unwrap_or(u32::MAX);
            if chapters > title.duration + slack {
                issues.push(ValidationIssue::ChaptersExceedDuration {
                    title: number,
                    chapters,
                    duration: title.duration,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;

    fn good_title(number: u32) -> Title {
        Title {
            number,
            duration: Duration::from_secs(600),
            resolution: Resolution::new(720, 480),
            frame_rate: 29.97,
            ..Default::default()
        }
    }

    fn chapter(index: u32, secs: u64) -> Chapter {
        Chapter {
            index,
            duration: Some(Duration::from_secs(secs)),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_titles() {
        let titles = vec![good_title(1), good_title(2)];
        assert!(validate(&titles).is_empty());
        assert!(validate(&[]).is_empty());
    }

    #[test]
    fn test_crop_exceeds_frame() {
        let mut title = good_title(1);
        title.autocrop = Cropping::new(240, 240, 0, 0);
        let issues = validate(&[title]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationIssue::CropExceedsFrame { title: 1, .. }));
        assert_eq!(
            issues[0].to_string(),
            "title 1: autocrop 240/240/0/0 exceeds frame 720x480"
        );
    }

    #[test]
    fn test_missing_values() {
        let title = Title::new(5);
        let issues = validate(&[title]);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingResolution { title: 5 },
                ValidationIssue::ZeroDuration { title: 5 },
            ]
        );
    }

    #[test]
    fn test_zero_frame_rate() {
        let mut title = good_title(2);
        title.frame_rate = 0.0;
        assert_eq!(
            validate(&[title]),
            vec![ValidationIssue::ZeroFrameRate { title: 2 }]
        );
    }

    #[test]
    fn test_duplicates_reported_once() {
        let titles = vec![good_title(1), good_title(1), good_title(1), good_title(2)];
        let issues = validate(&titles);
        assert_eq!(issues, vec![ValidationIssue::DuplicateTitleNumber { title: 1 }]);
        assert_eq!(issues[0].title(), 1);
        assert_eq!(issues[0].code(), "duplicate_title_number");
        assert!(ISSUE_CODES.contains(&issues[0].code()));
    }

    #[test]
    fn test_chapter_total() {
        let mut title = good_title(3);
        // Rounding slack: two chapters may overshoot by two seconds.
        title.chapters = vec![chapter(1, 301), chapter(2, 301)];
        assert!(validate(&[title.clone()]).is_empty());

        title.chapters = vec![chapter(1, 400), chapter(2, 400)];
        let issues = validate(&[title]);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "title 3: chapters total 00:13:20 but title lasts 00:10:00"
        );
    }
}
