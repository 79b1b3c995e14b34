//! Search history management.
//!
//! Recent search terms, most recent first, capped at a configurable count.
//! Stored under the `searchHistory` key (camelCase kept for wire fidelity
//! with existing profiles).

use crate::storage::{self, StorageBackend, StorageError, keys};

/// Search history manager.
pub struct SearchHistoryManager<'a, S> {
    store: &'a S,
    limit: usize,
}

impl<'a, S: StorageBackend> SearchHistoryManager<'a, S> {
    /// Create a new search history manager with the given retention cap.
    #[must_use]
    pub const fn new(store: &'a S, limit: usize) -> Self {
        Self { store, limit }
    }

    /// The retained search terms, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn entries(&self) -> Result<Vec<String>, StorageError> {
        storage::read_json_or_default(self.store, keys::SEARCH_HISTORY).await
    }

    /// Record a search term.
    ///
    /// The term is trimmed; an empty term is a no-op. A repeated term moves
    /// to the front rather than duplicating, and the list is truncated to
    /// the cap.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn record(&self, term: &str) -> Result<Vec<String>, StorageError> {
        let term = term.trim();
        if term.is_empty() {
            return self.entries().await;
        }

        let previous = self.entries().await?;
        let mut entries = Vec::with_capacity(self.limit);
        entries.push(term.to_owned());
        entries.extend(previous.into_iter().filter(|t| t != term));
        entries.truncate(self.limit);

        storage::write_json(self.store, keys::SEARCH_HISTORY, &entries).await?;
        Ok(entries)
    }

    /// Remove a single term from the history.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn remove(&self, term: &str) -> Result<Vec<String>, StorageError> {
        let mut entries = self.entries().await?;
        entries.retain(|t| t != term);
        storage::write_json(self.store, keys::SEARCH_HISTORY, &entries).await?;
        Ok(entries)
    }

    /// Drop the whole history by removing its key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::SEARCH_HISTORY).await
    }
}
