use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SqError>;
