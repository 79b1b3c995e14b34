//! Authentication and session management.
//!
//! Accounts live in the persisted `local_users` list; the active session is
//! a snapshot persisted under `current_user` and restored on startup.
//! Credentials are compared in plaintext - a placeholder mechanism carried by
//! the storage model (see [`crate::models::LocalUser`]), not one to extend.

mod error;

pub use error::AuthError;

use chrono::Utc;
use shoplite_core::{Phone, UserId};

use crate::clock;
use crate::models::{CurrentUser, LocalUser};
use crate::storage::{self, StorageBackend, keys};

/// Display name given to fresh accounts; users can't edit it yet, matching
/// the storefront's profile surface.
const DEFAULT_DISPLAY_NAME: &str = "customer";

/// Outcome of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    /// The session created by the auto-login.
    pub user: CurrentUser,
    /// Confirmation message for the caller to display.
    pub message: String,
}

/// Authentication service.
///
/// Handles sign-in, sign-up, sign-out, and session restore.
pub struct AuthService<'a, S> {
    store: &'a S,
}

impl<'a, S: StorageBackend> AuthService<'a, S> {
    /// Create a new authentication service over a storage port.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Sign in with phone number and password.
    ///
    /// On success the session snapshot is persisted under `current_user`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPhone` if the phone format is invalid.
    /// Returns `AuthError::InvalidCredentials` if no user matches.
    pub async fn sign_in(&self, phone: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let phone = Phone::parse(phone)?;

        let users: Vec<LocalUser> =
            storage::read_json_or_default(self.store, keys::LOCAL_USERS).await?;

        let Some(user) = users
            .iter()
            .find(|u| u.phone == phone && u.password == password)
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let session = CurrentUser::from(user);
        storage::write_json(self.store, keys::CURRENT_USER, &session).await?;

        tracing::info!(user_id = %session.id, "signed in");
        Ok(session)
    }

    /// Register a new account and sign it in immediately.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPhone` if the phone format is invalid.
    /// Returns `AuthError::EmptyPassword` if the password is empty.
    /// Returns `AuthError::PhoneTaken` if the phone is already registered;
    /// the user list is left unchanged in that case.
    pub async fn sign_up(&self, phone: &str, password: &str) -> Result<SignUp, AuthError> {
        let phone = Phone::parse(phone)?;

        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let mut users: Vec<LocalUser> =
            storage::read_json_or_default(self.store, keys::LOCAL_USERS).await?;

        if users.iter().any(|u| u.phone == phone) {
            return Err(AuthError::PhoneTaken);
        }

        let user = LocalUser {
            id: UserId::new(clock::next_id_millis().to_string()),
            phone,
            password: password.to_owned(),
            name: DEFAULT_DISPLAY_NAME.to_owned(),
            created_at: Utc::now(),
        };

        let session = CurrentUser::from(&user);
        users.push(user);
        storage::write_json(self.store, keys::LOCAL_USERS, &users).await?;

        // Auto-login: persist the session for the new account.
        storage::write_json(self.store, keys::CURRENT_USER, &session).await?;

        tracing::info!(user_id = %session.id, "account created");
        Ok(SignUp {
            user: session,
            message: "Welcome! You can sign in with your phone number from now on.".to_owned(),
        })
    }

    /// Clear the persisted session. Signing out while signed out is a
    /// successful no-op.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only if the backend cannot be written.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.store.remove(keys::CURRENT_USER).await?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Restore the persisted session, if any.
    ///
    /// A snapshot that fails to parse is logged and treated as signed out;
    /// startup never fails on a corrupt session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only if the backend cannot be read.
    pub async fn current(&self) -> Result<Option<CurrentUser>, AuthError> {
        let session = storage::read_json(self.store, keys::CURRENT_USER).await?;
        Ok(session)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        let created = auth.sign_up("13800138000", "s3cret").await.unwrap();
        auth.sign_out().await.unwrap();

        let session = auth.sign_in("13800138000", "s3cret").await.unwrap();
        assert_eq!(session.id, created.user.id);
        assert_eq!(auth.current().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_up_is_an_auto_login() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        let created = auth.sign_up("13800138000", "s3cret").await.unwrap();
        assert_eq!(auth.current().await.unwrap(), Some(created.user));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_phone_appends_nothing() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        auth.sign_up("13800138000", "first").await.unwrap();
        let err = auth.sign_up("13800138000", "second").await.unwrap_err();
        assert!(matches!(err, AuthError::PhoneTaken));

        let users: Vec<LocalUser> = storage::read_json_or_default(&store, keys::LOCAL_USERS)
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        auth.sign_up("13800138000", "right").await.unwrap();
        auth.sign_out().await.unwrap();

        let err = auth.sign_in("13800138000", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_unknown_phone() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        let err = auth.sign_in("13800138000", "whatever").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_out_when_signed_out_is_ok() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        auth.sign_out().await.unwrap();
        auth.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_session_reads_as_signed_out() {
        let store = MemoryStore::new();
        store.set(keys::CURRENT_USER, "{broken").await.unwrap();

        let auth = AuthService::new(&store);
        assert_eq!(auth.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_empty_password() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        let err = auth.sign_up("13800138000", "").await.unwrap_err();
        assert!(matches!(err, AuthError::EmptyPassword));
    }
}
