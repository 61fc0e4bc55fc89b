//! Feeling label extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SurveyError;

static FEELING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\w+)\]").expect("valid feeling regex"));

/// Return the `subgroup`-th bracketed word in `block`, zero-indexed, left to
/// right. `"[6] [90]"` yields `"6"` for subgroup 0 and `"90"` for subgroup 1.
///
/// A block without any bracketed word is an error for every subgroup,
/// including 0; there is no empty-label fallback.
///
/// # Errors
///
/// Returns [`SurveyError::InvalidArgument`] if `subgroup` is negative, and
/// [`SurveyError::OutOfRange`] if `subgroup` is not below the number of
/// bracketed words found.
pub fn extract_feeling(block: &str, subgroup: i64) -> Result<&str, SurveyError> {
    let Ok(index) = usize::try_from(subgroup) else {
        return Err(SurveyError::InvalidArgument(format!(
            "subgroup must be zero or positive; {subgroup} was supplied"
        )));
    };

    let matches: Vec<&str> = FEELING_RE
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    matches
        .get(index)
        .copied()
        .ok_or(SurveyError::OutOfRange {
            matched: matches.len(),
            subgroup: index,
        })
}
