use climate_core::BlockRange;

use crate::error::SurveyError;

/// Split `source` on every literal occurrence of `delimiter` and keep the
/// blocks inside `range`.
///
/// Negative bounds count back from the last block. Bounds past either end, or
/// an end before the start, select fewer blocks (or none) rather than failing.
///
/// # Errors
///
/// Returns [`SurveyError::InvalidArgument`] if `delimiter` is empty.
pub fn segment<'a>(
    source: &'a str,
    delimiter: &str,
    range: BlockRange,
) -> Result<Vec<&'a str>, SurveyError> {
    if delimiter.is_empty() {
        return Err(SurveyError::InvalidArgument(
            "delimiter must be non-empty".to_string(),
        ));
    }

    let blocks: Vec<&str> = source.split(delimiter).collect();
    let selected = range.resolve(blocks.len());
    Ok(blocks[selected].to_vec())
}
