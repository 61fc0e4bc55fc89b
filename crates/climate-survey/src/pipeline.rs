//! Survey pipeline orchestration.

use climate_core::SurveyConfig;

use crate::clean::clean_blocks_selecting;
use crate::error::SurveyError;
use crate::rank::rank;
use crate::registry::DatasetRegistry;
use crate::segment::segment;
use crate::source::load_source;
use crate::types::SurveyReport;

/// Run the full pipeline over an in-memory survey dump.
///
/// 1. Segment `source` on the configured delimiter and keep the block range.
/// 2. Clean each block into a `(feeling, body)` pair, skipping bad blocks.
/// 3. Register every pair, then score the whole registry in one pass.
/// 4. Rank feelings by average weight, highest first.
///
/// A dump where no block survives cleaning yields an empty ranking.
///
/// # Errors
///
/// Returns [`SurveyError::InvalidArgument`] if the delimiter is empty.
/// Per-block failures are logged and skipped (see [`clean_blocks_selecting`]).
pub fn run_survey(source: &str, config: &SurveyConfig) -> Result<SurveyReport, SurveyError> {
    let blocks = segment(source, &config.delimiter, config.block_range)?;
    let selected_blocks = blocks.len();

    tracing::debug!(
        selected = selected_blocks,
        range = %config.block_range,
        "survey dump segmented"
    );

    let mut registry = DatasetRegistry::new();
    match clean_blocks_selecting(&blocks, config.label_index) {
        Some(cleaned) => registry.extend(cleaned)?,
        None => {
            tracing::info!(
                selected = selected_blocks,
                "no block yielded a feeling; returning empty ranking"
            );
        }
    }

    let skipped_blocks = selected_blocks - registry.len();
    let scored = registry.score(config.average_policy);
    let rankings = rank(scored.records());

    tracing::info!(
        feelings = rankings.len(),
        skipped = skipped_blocks,
        policy = %config.average_policy,
        "survey scored"
    );

    Ok(SurveyReport {
        selected_blocks,
        skipped_blocks,
        average_policy: config.average_policy,
        rankings,
    })
}

/// Load the dump at `config.input_path` and run [`run_survey`] over it.
///
/// # Errors
///
/// Returns [`SurveyError::NotFound`] if the input file is missing, plus any
/// error from [`load_source`] or [`run_survey`].
pub fn run_survey_file(config: &SurveyConfig) -> Result<SurveyReport, SurveyError> {
    let source = load_source(&config.input_path)?;
    run_survey(&source, config)
}
