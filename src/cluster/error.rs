//! Error types for clustering operations

use thiserror::Error;

/// Errors raised by the clustering core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// A parameter was outside its valid range
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },
}

impl ClusterError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
