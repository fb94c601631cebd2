//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This is the full taxonomy surfaced at the service boundary. Every variant
/// is recoverable: the presentation layer translates it into a status code
/// and a user-facing message, and nothing here crashes the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A resource id did not resolve.
    #[error("not found")]
    NotFound,

    /// The acting identity is not permitted to perform the mutation
    /// (anonymous, or not the owner of the target resource).
    #[error("unauthorized")]
    Unauthorized,

    /// A field failed validation (empty or oversized).
    #[error("validation failed: {0}")]
    Validation(String),

    /// User creation collided with an already registered email.
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The backing store could not complete the request. Fatal to the
    /// request; the core performs at most one attempt, retries belong to
    /// outer layers.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_identity(email: impl Into<String>) -> Self {
        Self::DuplicateIdentity(email.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }
}
