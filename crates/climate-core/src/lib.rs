//! Shared configuration and domain types for the emotional climate survey tools.

mod config;
mod error;
mod policy;
mod survey_config;

pub use config::{load_survey_config, load_survey_config_from_env};
pub use error::ConfigError;
pub use policy::AveragePolicy;
pub use survey_config::{BlockRange, SurveyConfig};
