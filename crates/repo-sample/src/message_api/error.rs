//! Error types for message operations.

use repo_framework::RepoError;
use thiserror::Error;

/// Errors that can occur during message operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MessageError {
    /// The requested message was not found.
    #[error("Message not found: {0}")]
    NotFound(String),

    /// The message payload was rejected.
    #[error("Message validation error: {0}")]
    ValidationError(String),

    /// The listing parameters were out of range.
    #[error("Invalid message query: {0}")]
    InvalidQuery(String),

    /// An error occurred while communicating with the message API.
    #[error("Message API communication error: {0}")]
    ApiError(String),
}

impl From<RepoError> for MessageError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => MessageError::NotFound(msg),
            RepoError::Validation(msg) => MessageError::ValidationError(msg),
            RepoError::InvalidArgument(msg) => MessageError::InvalidQuery(msg),
            RepoError::Transport(msg) => MessageError::ApiError(msg),
        }
    }
}
