//! Emotional climate survey scoring pipeline.
//!
//! Splits a raw survey dump into question blocks, pulls the bracketed feeling
//! label out of each block, maps the ordinal responses (`Never` through
//! `Always`) to weights in `[0, 1]`, and ranks feelings by their average
//! weight, highest first. Malformed blocks are logged and skipped so one bad
//! question never sinks the batch.

pub mod clean;
pub mod error;
pub mod label;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod registry;
pub mod scorer;
pub mod segment;
pub mod source;
pub mod types;

pub use clean::{clean_block, clean_blocks, clean_blocks_selecting, BlockOutcome};
pub use error::SurveyError;
pub use label::extract_feeling;
pub use normalize::normalize_body;
pub use pipeline::{run_survey, run_survey_file};
pub use rank::rank;
pub use registry::{DatasetRegistry, FeelingRecord, ScoredDataset};
pub use scorer::{average_weight, map_weights, Weight};
pub use segment::segment;
pub use source::load_source;
pub use types::{CleanedBlock, RankedFeeling, SurveyReport};
