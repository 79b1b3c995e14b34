//! Shared storefront state.
//!
//! `StoreState` owns the storage backend, the event channel, and the
//! config-derived knobs, and hands out borrowed managers. It is the one
//! place that knows how the pieces wire together; managers themselves never
//! see configuration or each other.

use rust_decimal::Decimal;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::events::StoreEvents;
use crate::models::{CurrentUser, Order, OrderDraft, OrderItem};
use crate::remote::RemoteBackend;
use crate::services::{
    AuthService, CartManager, CatalogService, FavoritesManager, OrderManager,
    SearchHistoryManager,
};
use crate::storage::StorageBackend;

/// Shared storefront state.
pub struct StoreState<S> {
    store: S,
    events: StoreEvents,
    search_history_limit: usize,
    remote: Option<RemoteBackend>,
}

impl<S: StorageBackend> StoreState<S> {
    /// Wire up storefront state over a storage backend.
    ///
    /// The remote client is built only when the config carries genuine
    /// remote settings; the data paths never use it either way.
    #[must_use]
    pub fn new(store: S, config: &StoreConfig) -> Self {
        let remote = config.remote.as_ref().map(RemoteBackend::new);
        if let Some(backend) = &remote {
            tracing::info!(base_url = %backend.base_url(), "remote backend configured (unused by local data paths)");
        }

        Self {
            store,
            events: StoreEvents::new(),
            search_history_limit: config.search_history_limit,
            remote,
        }
    }

    /// The underlying storage backend.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The process-local event channel.
    #[must_use]
    pub const fn events(&self) -> &StoreEvents {
        &self.events
    }

    /// The remote backend client, when configured.
    #[must_use]
    pub const fn remote(&self) -> Option<&RemoteBackend> {
        self.remote.as_ref()
    }

    /// Authentication service.
    #[must_use]
    pub const fn auth(&self) -> AuthService<'_, S> {
        AuthService::new(&self.store)
    }

    /// Catalog accessor.
    #[must_use]
    pub const fn catalog(&self) -> CatalogService {
        CatalogService::new()
    }

    /// Order manager.
    #[must_use]
    pub const fn orders(&self) -> OrderManager<'_, S> {
        OrderManager::new(&self.store)
    }

    /// Cart manager.
    #[must_use]
    pub const fn cart(&self) -> CartManager<'_, S> {
        CartManager::new(&self.store, &self.events)
    }

    /// Favorites manager.
    #[must_use]
    pub const fn favorites(&self) -> FavoritesManager<'_, S> {
        FavoritesManager::new(&self.store, &self.events)
    }

    /// Search history manager.
    #[must_use]
    pub const fn search_history(&self) -> SearchHistoryManager<'_, S> {
        SearchHistoryManager::new(&self.store, self.search_history_limit)
    }

    /// The restored session, or `Unauthenticated` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthenticated`] when no session is persisted,
    /// and storage errors if the backend cannot be read.
    pub async fn require_session(&self) -> Result<CurrentUser> {
        self.auth()
            .current()
            .await?
            .ok_or(StoreError::Unauthenticated)
    }

    /// Check out the cart: create an order from its lines, then clear it.
    ///
    /// The total is the sum of line totals at the moment of checkout. The
    /// order append and the cart clear are two independent writes with no
    /// transaction around them; a crash in between leaves the order created
    /// and the cart intact, a window accepted by the storage model.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] when there is nothing to check out,
    /// plus order/storage errors from the underlying writes.
    pub async fn checkout(
        &self,
        session: &CurrentUser,
        shipping_address: String,
        payment_method: String,
    ) -> Result<Order> {
        let cart = self.cart();
        let items = cart.items().await.map_err(StoreError::Storage)?;
        if items.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let total_amount: Decimal = items.iter().map(crate::models::CartItem::line_total).sum();
        let order_items = items
            .iter()
            .map(|item| OrderItem {
                product_id: item.id,
                product_name: item.name.clone(),
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        let order = self
            .orders()
            .create(
                session,
                OrderDraft {
                    items: order_items,
                    total_amount,
                    shipping_address,
                    payment_method,
                },
            )
            .await?;

        cart.clear().await.map_err(StoreError::Storage)?;

        Ok(order)
    }
}
