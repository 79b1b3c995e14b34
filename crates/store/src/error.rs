//! Unified error handling.
//!
//! Each manager has its own error type; `StoreError` aggregates them for the
//! process boundary (the CLI), which logs the error and exits non-zero.
//! Domain errors (not-found, duplicate phone, bad credentials) are values
//! callers check, never panics; the only precondition turned into a
//! dedicated variant is `Unauthenticated`, raised by the boundary when an
//! order operation runs without a session.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::catalog::CatalogError;
use crate::services::orders::OrderError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage port failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An operation that requires a session ran without one.
    #[error("Not signed in")]
    Unauthenticated,

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::Unauthenticated.to_string(), "Not signed in");
        assert_eq!(StoreError::EmptyCart.to_string(), "Cart is empty");
    }
}
