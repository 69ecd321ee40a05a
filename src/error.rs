use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Reddit API error: {0}")]
    RedditApi(String),

    #[error("Archive API error: {0}")]
    ArchiveApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema mismatch: {0}")]
    Schema(String),

    #[error("Data file not found at {}. Run `skillpulse clean` first.", .0.display())]
    DataNotFound(PathBuf),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors the dashboard reports to the user instead of failing loudly.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::DataNotFound(_))
    }
}
