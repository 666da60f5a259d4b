//! # Result Envelope
//!
//! This module defines the wrapper every [`ApiService`](crate::service::ApiService)
//! call resolves to: the payload (if any) plus transport/status metadata, the
//! way a REST backend answers with a status code and either a body or an error
//! document.
//!
//! The repository never reaches into an envelope implicitly. Unwrapping is an
//! explicit conversion, [`Envelope::into_result`], called at each call site,
//! which maps the envelope's status onto the [`RepoError`] taxonomy.

use serde::{Deserialize, Serialize};

use crate::error::RepoError;

/// Structured error document carried by a non-success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper returned by an API service carrying the actual payload plus
/// status metadata.
///
/// A delivered envelope may still describe an application-level failure: a
/// 404 for a missing resource, a 422 for a rejected payload. Transport-level
/// failures (the service itself unreachable) never produce an envelope at
/// all; they surface as the `Err` arm of the service call.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// HTTP-like status code.
    pub status: u16,
    /// The decoded payload, present on success statuses.
    pub payload: Option<T>,
    /// The error document, present on failure statuses.
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    /// A 200 envelope wrapping a payload.
    pub fn ok(payload: T) -> Self {
        Self {
            status: 200,
            payload: Some(payload),
            error: None,
        }
    }

    /// A 201 envelope wrapping a newly created payload.
    pub fn created(payload: T) -> Self {
        Self {
            status: 201,
            payload: Some(payload),
            error: None,
        }
    }

    /// A 404 envelope for a missing resource.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(404, "NOT_FOUND", message)
    }

    /// A 422 envelope for a rejected create/update payload.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::failure(422, "VALIDATION", message)
    }

    /// A 400 envelope for out-of-range request parameters.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(400, "INVALID_ARGUMENT", message)
    }

    /// An arbitrary failure envelope.
    pub fn failure(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
            }),
        }
    }

    /// Whether the status denotes success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Unwrap the envelope into a plain value or a [`RepoError`].
    ///
    /// A success status without a payload is treated as a decoding failure
    /// and surfaces as [`RepoError::Transport`].
    pub fn into_result(self) -> Result<T, RepoError> {
        if self.is_success() {
            return match self.payload {
                Some(payload) => Ok(payload),
                None => Err(RepoError::Transport(format!(
                    "status {} carried no payload",
                    self.status
                ))),
            };
        }
        let message = match self.error {
            Some(body) => body.message,
            None => format!("status {}", self.status),
        };
        match self.status {
            404 => Err(RepoError::NotFound(message)),
            422 => Err(RepoError::Validation(message)),
            400 => Err(RepoError::InvalidArgument(message)),
            _ => Err(RepoError::Transport(message)),
        }
    }
}

impl Envelope<()> {
    /// A 204 envelope for operations that succeed without a body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            payload: Some(()),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_unwraps_to_payload() {
        let envelope = Envelope::ok(7u32);
        assert_eq!(envelope.into_result(), Ok(7));
    }

    #[test]
    fn not_found_maps_to_not_found_kind() {
        let envelope: Envelope<u32> = Envelope::not_found("no resource with id 9");
        assert_eq!(
            envelope.into_result(),
            Err(RepoError::NotFound("no resource with id 9".to_string()))
        );
    }

    #[test]
    fn unprocessable_maps_to_validation_kind() {
        let envelope: Envelope<u32> = Envelope::unprocessable("email is malformed");
        assert!(matches!(
            envelope.into_result(),
            Err(RepoError::Validation(_))
        ));
    }

    #[test]
    fn unexpected_status_maps_to_transport_kind() {
        let envelope: Envelope<u32> = Envelope::failure(503, "UNAVAILABLE", "try later");
        assert!(matches!(
            envelope.into_result(),
            Err(RepoError::Transport(_))
        ));
    }

    #[test]
    fn success_without_payload_is_a_transport_failure() {
        let envelope = Envelope::<u32> {
            status: 200,
            payload: None,
            error: None,
        };
        assert!(matches!(
            envelope.into_result(),
            Err(RepoError::Transport(_))
        ));
    }

    #[test]
    fn no_content_unwraps_to_unit() {
        assert_eq!(Envelope::no_content().into_result(), Ok(()));
    }
}
