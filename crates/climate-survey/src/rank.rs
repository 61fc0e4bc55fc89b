use std::cmp::Ordering;

use crate::registry::FeelingRecord;
use crate::types::RankedFeeling;

/// Rank records by average weight, highest first.
///
/// Undefined (`NaN`) averages go last. The sort is stable, so ties keep
/// registry order.
#[must_use]
pub fn rank(records: &[FeelingRecord]) -> Vec<RankedFeeling> {
    let mut ranked: Vec<RankedFeeling> = records
        .iter()
        .map(|record| RankedFeeling {
            feeling: record.feeling().to_string(),
            average_weight: record.average_weight(),
            responses: record.weights().len(),
            unmapped: record.unmapped_count(),
        })
        .collect();

    ranked.sort_by(|a, b| descending_nan_last(a.average_weight, b.average_weight));
    ranked
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
