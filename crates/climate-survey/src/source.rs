//! One-shot read of the raw survey dump.

use std::path::Path;

use crate::error::SurveyError;

/// Read the whole survey dump at `path` into memory.
///
/// # Errors
///
/// Returns [`SurveyError::NotFound`] if `path` is not an existing file,
/// [`SurveyError::NotText`] if its contents are not valid UTF-8, and
/// [`SurveyError::Io`] for any other read failure.
pub fn load_source(path: &Path) -> Result<String, SurveyError> {
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(SurveyError::NotFound { path: shown });
    }

    let bytes = std::fs::read(path).map_err(|source| SurveyError::Io {
        path: shown.clone(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| SurveyError::NotText {
        path: shown.clone(),
    })?;

    tracing::debug!(path = %shown, bytes = text.len(), "survey dump loaded");
    Ok(text)
}
