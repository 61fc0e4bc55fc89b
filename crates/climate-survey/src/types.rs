use climate_core::AveragePolicy;
use serde::Serialize;

/// A block that survived cleaning: its feeling label and normalized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedBlock {
    /// The bracketed label, without brackets.
    pub feeling: String,
    /// Responses joined by single spaces, trimmed.
    pub body: String,
}

impl CleanedBlock {
    #[must_use]
    pub fn new(feeling: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            feeling: feeling.into(),
            body: body.into(),
        }
    }
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeeling {
    pub feeling: String,
    /// Mean weight under the run's [`AveragePolicy`]. `NaN` when undefined;
    /// serialized as `null`.
    pub average_weight: f64,
    /// Number of response tokens in the body.
    pub responses: usize,
    /// How many of those tokens had no weight.
    pub unmapped: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    /// Blocks left after applying the block range.
    pub selected_blocks: usize,
    /// Selected blocks dropped because no feeling could be extracted.
    pub skipped_blocks: usize,
    pub average_policy: AveragePolicy,
    /// Highest average weight first.
    pub rankings: Vec<RankedFeeling>,
}
