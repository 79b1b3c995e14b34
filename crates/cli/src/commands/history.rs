//! Search history commands.

use shoplite_store::{StorageBackend, StoreError, StoreState};

/// Show recent search terms, most recent first.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be read.
pub async fn show<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    let entries = state
        .search_history()
        .entries()
        .await
        .map_err(StoreError::Storage)?;

    if entries.is_empty() {
        tracing::info!("No search history");
        return Ok(());
    }

    for term in entries {
        tracing::info!("  {term}");
    }
    Ok(())
}

/// Record a search term.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn add<S: StorageBackend>(state: &StoreState<S>, term: &str) -> Result<(), StoreError> {
    state
        .search_history()
        .record(term)
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Recorded search: {term}");
    Ok(())
}

/// Remove one search term.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn remove<S: StorageBackend>(
    state: &StoreState<S>,
    term: &str,
) -> Result<(), StoreError> {
    state
        .search_history()
        .remove(term)
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Removed search: {term}");
    Ok(())
}

/// Clear the whole history.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn clear<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    state
        .search_history()
        .clear()
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Search history cleared");
    Ok(())
}
