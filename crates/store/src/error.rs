//! Store operation errors (infrastructure side).

use thiserror::Error;

use curio_core::{CategoryId, DomainError};

/// Error from a store operation.
///
/// Deterministic outcomes (`NotFound`, `DuplicateEmail`, `MissingCategory`)
/// are part of the contract; `Unavailable` covers connectivity and
/// transaction failures and is fatal to the request. The store performs at
/// most one attempt; retries belong to outer layers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested row does not exist.
    #[error("not found")]
    NotFound,

    /// User creation hit the unique email constraint.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// An item insert referenced a category that does not resolve.
    #[error("category {0} does not exist")]
    MissingCategory(CategoryId),

    /// The backing store could not complete the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound | StoreError::MissingCategory(_) => DomainError::NotFound,
            StoreError::DuplicateEmail(email) => DomainError::DuplicateIdentity(email),
            StoreError::Unavailable(msg) => DomainError::StoreUnavailable(msg),
        }
    }
}
