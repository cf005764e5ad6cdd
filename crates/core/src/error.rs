//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, total verification). Transport failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A dish name is not present in the restaurant's catalog.
    #[error("dish not found: {0}")]
    NotFound(String),

    /// A basket quantity was not a positive integer.
    #[error("invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    /// The order's own total disagrees with the total recomputed from the catalog.
    #[error("order total {declared} does not match catalog total {computed}")]
    TotalMismatch { declared: Money, computed: Money },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn total_mismatch(declared: Money, computed: Money) -> Self {
        Self::TotalMismatch { declared, computed }
    }
}
