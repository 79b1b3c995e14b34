//! Integration tests for Shoplite.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoplite-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Sign-up/sign-in/sign-out round trips
//! - `order_flow` - Order scoping, ordering, and status updates
//! - `cart_checkout` - Cart semantics and the checkout composition
//! - `storage_roundtrip` - Storage port properties on the file backend
//!
//! Tests run against [`shoplite_store::MemoryStore`] unless they exercise
//! persistence, in which case they use a [`shoplite_store::FileStore`] in a
//! temporary directory.

use shoplite_store::models::CurrentUser;
use shoplite_store::{MemoryStore, StorageBackend, StoreConfig, StoreState};

/// Storefront state over a fresh in-memory profile.
#[must_use]
pub fn memory_state() -> StoreState<MemoryStore> {
    StoreState::new(MemoryStore::new(), &StoreConfig::default())
}

/// Create and sign in a user with the given phone number.
///
/// # Panics
///
/// Panics if sign-up fails; tests pass distinct, valid phone numbers.
pub async fn signed_up<S: StorageBackend>(state: &StoreState<S>, phone: &str) -> CurrentUser {
    state
        .auth()
        .sign_up(phone, "integration-password")
        .await
        .expect("sign-up should succeed in test setup")
        .user
}
