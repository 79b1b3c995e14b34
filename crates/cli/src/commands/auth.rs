//! Account and session commands.

use shoplite_store::{StorageBackend, StoreError, StoreState};

/// Create an account and sign in.
///
/// # Errors
///
/// Returns `StoreError::Auth` for an invalid phone, an empty password, or a
/// phone that is already registered.
pub async fn sign_up<S: StorageBackend>(
    state: &StoreState<S>,
    phone: &str,
    password: &str,
) -> Result<(), StoreError> {
    let outcome = state.auth().sign_up(phone, password).await?;
    tracing::info!("Account created: {} ({})", outcome.user.id, outcome.user.phone);
    tracing::info!("{}", outcome.message);
    Ok(())
}

/// Sign in to an existing account.
///
/// # Errors
///
/// Returns `StoreError::Auth` when the credentials do not match.
pub async fn sign_in<S: StorageBackend>(
    state: &StoreState<S>,
    phone: &str,
    password: &str,
) -> Result<(), StoreError> {
    let session = state.auth().sign_in(phone, password).await?;
    tracing::info!(
        "Signed in as {} ({})",
        session.user_metadata.name,
        session.phone
    );
    Ok(())
}

/// Clear the current session. A no-op when already signed out.
///
/// # Errors
///
/// Returns `StoreError::Auth` only if the profile cannot be written.
pub async fn sign_out<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    state.auth().sign_out().await?;
    tracing::info!("Signed out");
    Ok(())
}

/// Show the current session, if any.
///
/// # Errors
///
/// Returns `StoreError::Auth` only if the profile cannot be read.
pub async fn whoami<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    match state.auth().current().await? {
        Some(session) => tracing::info!(
            "Signed in as {} ({}), user id {}",
            session.user_metadata.name,
            session.phone,
            session.id
        ),
        None => tracing::info!("Not signed in"),
    }
    Ok(())
}
