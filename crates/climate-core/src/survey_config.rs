use std::path::PathBuf;

use crate::AveragePolicy;

/// Half-open selection `[start, end)` applied to the segmented blocks.
///
/// Bounds index like slices in the survey tooling the dumps come from: a
/// negative bound counts back from the last block, `end: None` selects through
/// the last block, and anything out of range is clamped. No bound is ever an
/// error; it just selects fewer blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockRange {
    pub start: i64,
    pub end: Option<i64>,
}

impl BlockRange {
    #[must_use]
    pub fn new(start: i64, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Every block, from the first to the last.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Concrete `start..end` indices into a sequence of `len` blocks.
    ///
    /// Always satisfies `start <= end <= len`.
    #[must_use]
    pub fn resolve(&self, len: usize) -> std::ops::Range<usize> {
        let end = self.end.map_or(len, |end| clamp_index(end, len));
        let start = clamp_index(self.start, len).min(end);
        start..end
    }
}

fn clamp_index(index: i64, len: usize) -> usize {
    if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(index).map_or(len, |i| i.min(len))
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{end}", self.start),
            None => write!(f, "{}..", self.start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    pub input_path: PathBuf,
    pub delimiter: String,
    pub block_range: BlockRange,
    /// Which bracketed token in a block names the feeling. Signed so that a
    /// negative selector from the environment reaches the extractor and is
    /// rejected there.
    pub label_index: i64,
    pub average_policy: AveragePolicy,
    pub log_level: String,
}
