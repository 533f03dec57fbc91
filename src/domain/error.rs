//! Domain errors

use thiserror::Error;

/// Domain-level error types
///
/// The first three variants are client-correctable conditions raised by the
/// customer service itself. `Storage` carries infrastructure faults surfaced
/// by a storage backend; repositories classify uniqueness violations as
/// `Duplicate` before they reach this layer, so no driver error type leaks
/// out of the storage port.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Requested id has no corresponding record
    #[error("{0}")]
    NotFound(String),

    /// Requested email already belongs to a different record
    #[error("{0}")]
    Duplicate(String),

    /// Well-formed request that cannot be applied (e.g. changes nothing)
    #[error("{0}")]
    Validation(String),

    /// Unrecoverable storage fault
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
