use semver::Version;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for changes operations
#[derive(Error, Debug)]
pub enum ChangesError {
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to load releases")]
    Aggregation(#[source] Box<ChangesError>),

    #[error("Version \"{0}\" was not found")]
    NotFound(Version),

    #[error("Release loading task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Target error: {0}")]
    Target(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changes
pub type Result<T> = std::result::Result<T, ChangesError>;

impl ChangesError {
    /// Create a decode error for a metadata file
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ChangesError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a loader failure surfaced by the aggregator
    pub fn aggregation(inner: ChangesError) -> Self {
        ChangesError::Aggregation(Box::new(inner))
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangesError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangesError::Version(msg.into())
    }

    /// Create a target error with context
    pub fn target(msg: impl Into<String>) -> Self {
        ChangesError::Target(msg.into())
    }
}
