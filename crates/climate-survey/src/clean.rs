//! Per-block cleaning: the one place in the pipeline where bad input is
//! tolerated instead of propagated.

use crate::error::SurveyError;
use crate::label::extract_feeling;
use crate::normalize::normalize_body;
use crate::types::CleanedBlock;

/// What happened to a single block.
#[derive(Debug)]
pub enum BlockOutcome {
    Cleaned(CleanedBlock),
    /// No feeling could be extracted; the body was never looked at.
    Skipped(SurveyError),
}

/// Clean one block, selecting the `label_index`-th bracketed word as its
/// feeling.
#[must_use]
pub fn clean_block(block: &str, label_index: i64) -> BlockOutcome {
    match extract_feeling(block, label_index) {
        Ok(feeling) => BlockOutcome::Cleaned(CleanedBlock::new(feeling, normalize_body(block))),
        Err(e) => BlockOutcome::Skipped(e),
    }
}

/// Clean every block using its first bracketed word as the feeling.
///
/// See [`clean_blocks_selecting`].
#[must_use]
pub fn clean_blocks<S: AsRef<str>>(blocks: &[S]) -> Option<Vec<CleanedBlock>> {
    clean_blocks_selecting(blocks, 0)
}

/// Clean every block, logging and skipping the ones without a usable feeling.
///
/// Returns `None` when no block survived, so "nothing cleaned" stays distinct
/// from "cleaned blocks with empty bodies".
#[must_use]
pub fn clean_blocks_selecting<S: AsRef<str>>(
    blocks: &[S],
    label_index: i64,
) -> Option<Vec<CleanedBlock>> {
    let mut cleaned = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        match clean_block(block.as_ref(), label_index) {
            BlockOutcome::Cleaned(pair) => cleaned.push(pair),
            BlockOutcome::Skipped(e) => {
                tracing::warn!(
                    block = index,
                    error = %e,
                    "failed to extract a feeling from block; skipping it"
                );
            }
        }
    }

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
