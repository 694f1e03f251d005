//! Custom error types for the archiver daemon.

use thiserror::Error;

/// Archiver errors.
#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error("feed error: {0}")]
    Feed(#[from] velib_feed::FeedError),

    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for archiver operations.
pub type ArchiverResult<T> = Result<T, ArchiverError>;
