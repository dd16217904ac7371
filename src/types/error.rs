use thiserror::Error;

/// leetlens error types
#[derive(Error, Debug)]
pub enum LeetlensError {
    /// Failed to parse JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure
    #[error("http error: {0}")]
    Http(String),

    /// Upstream API rejected the request or returned no data
    #[error("api error: {0}")]
    Api(String),

    /// Saved-usernames store operation failed
    #[error("store error: {0}")]
    Store(String),
}

/// Result type alias for leetlens
pub type Result<T> = std::result::Result<T, LeetlensError>;
