//! Error types for user operations.

use repo_framework::RepoError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user data provided was rejected.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// The listing parameters were out of range.
    #[error("Invalid user query: {0}")]
    InvalidQuery(String),

    /// An error occurred while communicating with the user API.
    #[error("User API communication error: {0}")]
    ApiError(String),
}

impl From<RepoError> for UserError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => UserError::NotFound(msg),
            RepoError::Validation(msg) => UserError::ValidationError(msg),
            RepoError::InvalidArgument(msg) => UserError::InvalidQuery(msg),
            RepoError::Transport(msg) => UserError::ApiError(msg),
        }
    }
}
