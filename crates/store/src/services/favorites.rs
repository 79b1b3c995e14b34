//! Favorites management.
//!
//! Favorites are a persisted list of product IDs under the `favorites` key.
//! Toggling emits [`StoreEvent::FavoritesUpdated`] so listening views
//! re-read the list.

use shoplite_core::ProductId;

use crate::events::{StoreEvent, StoreEvents};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Favorites manager.
pub struct FavoritesManager<'a, S> {
    store: &'a S,
    events: &'a StoreEvents,
}

impl<'a, S: StorageBackend> FavoritesManager<'a, S> {
    /// Create a new favorites manager over a storage port and event channel.
    #[must_use]
    pub const fn new(store: &'a S, events: &'a StoreEvents) -> Self {
        Self { store, events }
    }

    /// The favorited product IDs, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn list(&self) -> Result<Vec<ProductId>, StorageError> {
        storage::read_json_or_default(self.store, keys::FAVORITES).await
    }

    /// Whether a product is currently favorited.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn contains(&self, id: ProductId) -> Result<bool, StorageError> {
        Ok(self.list().await?.contains(&id))
    }

    /// Toggle a product's favorite state.
    ///
    /// Returns `true` when the product is favorited after the call.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn toggle(&self, id: ProductId) -> Result<bool, StorageError> {
        let mut favorites = self.list().await?;

        let now_favorited = if favorites.contains(&id) {
            favorites.retain(|fav| *fav != id);
            false
        } else {
            favorites.push(id);
            true
        };

        storage::write_json(self.store, keys::FAVORITES, &favorites).await?;
        self.events.emit(StoreEvent::FavoritesUpdated);
        Ok(now_favorited)
    }
}
