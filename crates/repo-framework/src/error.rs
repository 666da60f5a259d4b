//! # Repository Errors
//!
//! This module defines the common error taxonomy used throughout the repository
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across all services and repositories.

/// Errors that can surface from a repository operation.
///
/// Every failure a caller can observe falls into one of four kinds. Domain
/// crates typically map these into their own error enums via
/// [`Repository::map_error`](crate::repository::Repository::map_error).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoError {
    /// The requested id has no corresponding remote resource.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The remote service rejected a create/update payload.
    #[error("Validation rejected: {0}")]
    Validation(String),

    /// Caller-supplied listing parameters are out of the allowed range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection failure, unexpected status, or an undecodable response.
    #[error("Transport failure: {0}")]
    Transport(String),
}
