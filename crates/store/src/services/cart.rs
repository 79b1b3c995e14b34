//! Cart management.
//!
//! The cart is a persisted list under the `cart` key. Every mutation
//! re-serializes the whole list and emits [`StoreEvent::CartUpdated`] so
//! other live views refresh their derived counts.

use rust_decimal::Decimal;

use shoplite_core::ProductId;

use crate::events::{StoreEvent, StoreEvents};
use crate::models::{CartItem, Product};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Cart manager.
pub struct CartManager<'a, S> {
    store: &'a S,
    events: &'a StoreEvents,
}

impl<'a, S: StorageBackend> CartManager<'a, S> {
    /// Create a new cart manager over a storage port and event channel.
    #[must_use]
    pub const fn new(store: &'a S, events: &'a StoreEvents) -> Self {
        Self { store, events }
    }

    /// The current cart contents. An absent or unparseable cart reads as
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn items(&self) -> Result<Vec<CartItem>, StorageError> {
        storage::read_json_or_default(self.store, keys::CART).await
    }

    /// Add a product to the cart.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line is appended snapshotting the product's name,
    /// price, and image. A quantity below 1 is treated as 1.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn add(&self, product: &Product, quantity: u32) -> Result<Vec<CartItem>, StorageError> {
        let quantity = quantity.max(1);
        let mut items = self.items().await?;

        if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
            existing.quantity += quantity;
        } else {
            items.push(CartItem::from_product(product, quantity));
        }

        storage::write_json(self.store, keys::CART, &items).await?;
        self.events.emit(StoreEvent::CartUpdated);
        Ok(items)
    }

    /// Set the quantity of a cart line.
    ///
    /// A quantity below 1 is rejected as a no-op, as is an ID that is not in
    /// the cart; the stored list is only rewritten when something changed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn set_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items().await?;

        if quantity < 1 {
            return Ok(items);
        }

        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(items);
        };

        if item.quantity != quantity {
            item.quantity = quantity;
            storage::write_json(self.store, keys::CART, &items).await?;
            self.events.emit(StoreEvent::CartUpdated);
        }

        Ok(items)
    }

    /// Remove a cart line by product ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn remove(&self, id: ProductId) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items().await?;
        items.retain(|item| item.id != id);
        storage::write_json(self.store, keys::CART, &items).await?;
        self.events.emit(StoreEvent::CartUpdated);
        Ok(items)
    }

    /// Empty the cart by removing the `cart` key entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CART).await?;
        self.events.emit(StoreEvent::CartUpdated);
        Ok(())
    }

    /// Sum of line totals across the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn total_price(&self) -> Result<Decimal, StorageError> {
        let items = self.items().await?;
        Ok(items.iter().map(CartItem::line_total).sum())
    }

    /// Total number of units across all lines (the cart badge count).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn total_items(&self) -> Result<u32, StorageError> {
        let items = self.items().await?;
        Ok(items.iter().map(|item| item.quantity).sum())
    }
}
