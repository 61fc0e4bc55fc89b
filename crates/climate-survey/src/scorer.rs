//! Ordinal response weights.

use climate_core::AveragePolicy;

/// Response words and their weights. Matching is exact and case-sensitive.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    ("Never", 0.0),
    ("Sometimes", 1.0 / 3.0),
    ("Often", 2.0 / 3.0),
    ("Always", 1.0),
];

/// Weight of one response token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    Mapped(f64),
    /// The token is not a known response. Distinct from a weight of zero.
    Unmapped,
}

impl Weight {
    #[must_use]
    pub fn for_token(token: &str) -> Self {
        LEXICON
            .iter()
            .find(|&&(word, _)| word == token)
            .map_or(Weight::Unmapped, |&(_, weight)| Weight::Mapped(weight))
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Weight::Mapped(v) => Some(v),
            Weight::Unmapped => None,
        }
    }
}

/// Map every single-space separated token of `body` to its weight.
///
/// The output has exactly one entry per token, in order. Consecutive spaces
/// produce empty tokens, which are unmapped.
#[must_use]
pub fn map_weights(body: &str) -> Vec<Weight> {
    body.split(' ').map(Weight::for_token).collect()
}

/// Mean of `weights` under `policy`.
///
/// An empty sequence, or one with nothing left to average, is `NaN`.
#[must_use]
pub fn average_weight(weights: &[Weight], policy: AveragePolicy) -> f64 {
    let values: Vec<f64> = match policy {
        AveragePolicy::Propagate => {
            let mut values = Vec::with_capacity(weights.len());
            for weight in weights {
                match weight.value() {
                    Some(v) => values.push(v),
                    None => return f64::NAN,
                }
            }
            values
        }
        AveragePolicy::Exclude => weights.iter().filter_map(|w| w.value()).collect(),
        AveragePolicy::AsZero => weights.iter().map(|w| w.value().unwrap_or(0.0)).collect(),
    };

    if values.is_empty() {
        return f64::NAN;
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}
