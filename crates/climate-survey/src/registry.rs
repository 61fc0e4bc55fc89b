//! Per-run collection of feeling records.
//!
//! Records are registered first and scored afterwards, in one pass over the
//! whole collection. [`DatasetRegistry::score`] consumes the registry, so no
//! record can be added after scoring starts and no unscored record can be
//! ranked.

use climate_core::AveragePolicy;

use crate::error::SurveyError;
use crate::scorer::{average_weight, map_weights, Weight};
use crate::types::CleanedBlock;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRecord {
    feeling: String,
    body: String,
}

/// Registration phase. Insertion order is kept and labels are not
/// deduplicated.
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    pending: Vec<PendingRecord>,
}

impl DatasetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record with no weights yet.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::InvalidArgument`] if `feeling` is empty.
    pub fn register(
        &mut self,
        feeling: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), SurveyError> {
        let feeling = feeling.into();
        if feeling.is_empty() {
            return Err(SurveyError::InvalidArgument(
                "feeling label must be non-empty".to_string(),
            ));
        }
        self.pending.push(PendingRecord {
            feeling,
            body: body.into(),
        });
        Ok(())
    }

    /// Register every cleaned block in order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`DatasetRegistry::register`] failure.
    pub fn extend(
        &mut self,
        blocks: impl IntoIterator<Item = CleanedBlock>,
    ) -> Result<(), SurveyError> {
        for block in blocks {
            self.register(block.feeling, block.body)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Close registration and weight every record.
    #[must_use]
    pub fn score(self, policy: AveragePolicy) -> ScoredDataset {
        let records = self
            .pending
            .into_iter()
            .map(|pending| FeelingRecord::scored(pending, policy))
            .collect();
        ScoredDataset { records, policy }
    }
}

/// One feeling's responses with their weights and average.
///
/// Fields are read-only; `weights` and `average_weight` are computed together
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeelingRecord {
    feeling: String,
    body: String,
    weights: Vec<Weight>,
    average_weight: f64,
}

impl FeelingRecord {
    fn scored(pending: PendingRecord, policy: AveragePolicy) -> Self {
        let weights = map_weights(&pending.body);
        let average_weight = average_weight(&weights, policy);
        Self {
            feeling: pending.feeling,
            body: pending.body,
            weights,
            average_weight,
        }
    }

    #[must_use]
    pub fn feeling(&self) -> &str {
        &self.feeling
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    #[must_use]
    pub fn average_weight(&self) -> f64 {
        self.average_weight
    }

    #[must_use]
    pub fn unmapped_count(&self) -> usize {
        self.weights
            .iter()
            .filter(|w| matches!(w, Weight::Unmapped))
            .count()
    }
}

/// Scoring phase: every record carries its weights.
#[derive(Debug, Clone)]
pub struct ScoredDataset {
    records: Vec<FeelingRecord>,
    policy: AveragePolicy,
}

impl ScoredDataset {
    #[must_use]
    pub fn records(&self) -> &[FeelingRecord] {
        &self.records
    }

    #[must_use]
    pub fn policy(&self) -> AveragePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut registry = DatasetRegistry::new();
        registry.register("Bored", "Never").unwrap();
        registry.register("Calm", "Always").unwrap();
        registry.register("Bored", "Often").unwrap();
        assert_eq!(registry.len(), 3);

        let scored = registry.score(AveragePolicy::Propagate);
        let feelings: Vec<&str> = scored.records().iter().map(FeelingRecord::feeling).collect();
        assert_eq!(feelings, vec!["Bored", "Calm", "Bored"]);
        assert_eq!(scored.records()[2].body(), "Often");
    }

    #[test]
    fn empty_feeling_is_rejected() {
        let mut registry = DatasetRegistry::new();
        let err = registry.register("", "Never").unwrap_err();
        assert!(matches!(err, SurveyError::InvalidArgument(_)), "got: {err:?}");
        assert!(registry.is_empty());
    }

    #[test]
    fn scoring_sets_weights_and_average_together() {
        let mut registry = DatasetRegistry::new();
        registry
            .extend([CleanedBlock::new(
                "Supported",
                "Often Always Often Often Sometimes Never",
            )])
            .unwrap();

        let scored = registry.score(AveragePolicy::Propagate);
        let record = &scored.records()[0];
        assert_eq!(record.weights().len(), 6);
        assert_eq!(record.weights()[1], Weight::Mapped(1.0));
        assert_eq!(record.unmapped_count(), 0);
        assert!((record.average_weight() - 5.0 / 9.0).abs() < 1e-12);
        assert_eq!(scored.policy(), AveragePolicy::Propagate);
    }

    #[test]
    fn unmapped_tokens_follow_the_policy() {
        let build = |policy| {
            let mut registry = DatasetRegistry::new();
            registry.register("Odd", "Always Never The Velvet").unwrap();
            registry.score(policy)
        };

        let propagated = build(AveragePolicy::Propagate);
        assert_eq!(propagated.records()[0].unmapped_count(), 2);
        assert!(propagated.records()[0].average_weight().is_nan());

        let excluded = build(AveragePolicy::Exclude);
        assert!((excluded.records()[0].average_weight() - 0.5).abs() < 1e-12);

        let zeroed = build(AveragePolicy::AsZero);
        assert!((zeroed.records()[0].average_weight() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_registry_scores_to_empty_dataset() {
        let scored = DatasetRegistry::new().score(AveragePolicy::Exclude);
        assert!(scored.records().is_empty());
    }
}
