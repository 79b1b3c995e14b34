//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid phone number format.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] shoplite_core::PhoneError),

    /// Invalid credentials (wrong password or unknown phone).
    #[error("phone number or password is incorrect")]
    InvalidCredentials,

    /// Phone number already registered.
    #[error("this phone number is already registered")]
    PhoneTaken,

    /// Empty password at sign-up.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// Storage port failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
