use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How unmapped responses take part in a feeling's average weight.
///
/// `Propagate` is the default: any unmapped response leaves the average
/// undefined (`NaN`), so a dump with stray tokens is visible in the report
/// instead of silently skewing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AveragePolicy {
    #[default]
    Propagate,
    Exclude,
    #[serde(rename = "zero")]
    AsZero,
}

impl std::fmt::Display for AveragePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AveragePolicy::Propagate => write!(f, "propagate"),
            AveragePolicy::Exclude => write!(f, "exclude"),
            AveragePolicy::AsZero => write!(f, "zero"),
        }
    }
}

impl FromStr for AveragePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(AveragePolicy::Propagate),
            "exclude" => Ok(AveragePolicy::Exclude),
            "zero" => Ok(AveragePolicy::AsZero),
            other => Err(ConfigError::InvalidEnvVar {
                var: "CLIMATE_AVERAGE_POLICY".to_string(),
                reason: format!("unknown average policy '{other}'; expected propagate, exclude or zero"),
            }),
        }
    }
}
