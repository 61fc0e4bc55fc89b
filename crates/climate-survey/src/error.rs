use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("{path} could not be found")]
    NotFound { path: String },

    #[error("{path} is not UTF-8 text")]
    NotText { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "subgroup must be less than the number of words in brackets; \
         {matched} word(s) matched and subgroup {subgroup} was requested"
    )]
    OutOfRange { matched: usize, subgroup: usize },
}
