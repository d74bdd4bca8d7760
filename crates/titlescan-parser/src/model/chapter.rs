//! Chapter record.

use std::time::Duration;

/// A chapter entry of a title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// 1-based chapter number.
    pub index: u32,
    /// Chapter length, when reported.
    pub duration: Option<Duration>,
    /// Free text left on the line after the known components.
    pub name: Option<String>,
    /// First and last DVD cell of the chapter.
    pub cells: Option<(u32, u32)>,
    /// Size in 2048-byte blocks.
    pub blocks: Option<u64>,
}
