use std::path::PathBuf;

use crate::survey_config::{BlockRange, SurveyConfig};
use crate::{AveragePolicy, ConfigError};

/// Load survey configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_survey_config() -> Result<SurveyConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_survey_config_from_env()
}

/// Load survey configuration from environment variables already in the process.
///
/// Unlike [`load_survey_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_survey_config_from_env() -> Result<SurveyConfig, ConfigError> {
    build_survey_config(|key| std::env::var(key))
}

/// Build survey configuration using the provided env-var lookup function.
///
/// Every variable has a default, matching the layout of the exported survey
/// dump: blocks separated by `---`, questions living in blocks 5 through 14.
fn build_survey_config<F>(lookup: F) -> Result<SurveyConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let input_path = PathBuf::from(or_default(
        "CLIMATE_INPUT_PATH",
        "EmotionalClimateData.dat",
    ));

    let delimiter = or_default("CLIMATE_DELIMITER", "---");
    if delimiter.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CLIMATE_DELIMITER".to_string(),
            reason: "delimiter must be non-empty".to_string(),
        });
    }

    let start = parse_i64("CLIMATE_BLOCK_START", "5")?;
    let end = parse_block_end(&or_default("CLIMATE_BLOCK_END", "15"))?;
    let label_index = parse_i64("CLIMATE_LABEL_INDEX", "0")?;

    let average_policy =
        or_default("CLIMATE_AVERAGE_POLICY", "propagate").parse::<AveragePolicy>()?;
    let log_level = or_default("CLIMATE_LOG_LEVEL", "info");

    Ok(SurveyConfig {
        input_path,
        delimiter,
        block_range: BlockRange::new(start, end),
        label_index,
        average_policy,
        log_level,
    })
}

/// Parse the upper block bound. `none` or an empty value selects to the end;
/// a negative value counts back from the last block.
fn parse_block_end(raw: &str) -> Result<Option<i64>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "CLIMATE_BLOCK_END".to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
