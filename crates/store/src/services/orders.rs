//! Order management.
//!
//! Orders for every user live in one flat persisted list under
//! `user_orders`; ownership is enforced by filtering on `user_id`, not by
//! referential integrity. Every operation takes the current session
//! explicitly - there is no ambient "who is signed in" state down here, and
//! the caller decides what a missing session means (the CLI maps it to an
//! unauthenticated error before ever reaching this module).
//!
//! Updates rewrite the whole list, so two processes updating concurrently
//! race and the last writer wins; see the crate docs for the consistency
//! model.

use chrono::Utc;
use thiserror::Error;

use shoplite_core::{OrderId, OrderStatus};

use crate::clock;
use crate::models::{CurrentUser, Order, OrderDraft};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with this ID belongs to the current user.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// Storage port failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Order manager.
pub struct OrderManager<'a, S> {
    store: &'a S,
}

impl<'a, S: StorageBackend> OrderManager<'a, S> {
    /// Create a new order manager over a storage port.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create an order for the signed-in user.
    ///
    /// Stamps a fresh timestamp-derived ID, the session's user ID, status
    /// `pending`, and the creation time; everything else - including the
    /// total, which is not recomputed - comes from the draft.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Storage` if the backend cannot be read or
    /// written.
    pub async fn create(
        &self,
        session: &CurrentUser,
        draft: OrderDraft,
    ) -> Result<Order, OrderError> {
        let order = Order {
            id: OrderId::new(clock::next_id_millis()),
            user_id: session.id.clone(),
            items: draft.items,
            total_amount: draft.total_amount,
            status: OrderStatus::Pending,
            shipping_address: draft.shipping_address,
            payment_method: draft.payment_method,
            created_at: Utc::now(),
            updated_at: None,
        };

        let mut orders: Vec<Order> =
            storage::read_json_or_default(self.store, keys::USER_ORDERS).await?;
        orders.push(order.clone());
        storage::write_json(self.store, keys::USER_ORDERS, &orders).await?;

        tracing::info!(order_id = %order.id, user_id = %order.user_id, "order created");
        Ok(order)
    }

    /// All of the signed-in user's orders, in creation (append) order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Storage` if the backend cannot be read.
    pub async fn list(&self, session: &CurrentUser) -> Result<Vec<Order>, OrderError> {
        let orders: Vec<Order> =
            storage::read_json_or_default(self.store, keys::USER_ORDERS).await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.user_id == session.id)
            .collect())
    }

    /// A single order by ID, if it belongs to the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` when no order matches both the ID and
    /// the session's user - another user's order is indistinguishable from
    /// a missing one.
    pub async fn get(&self, session: &CurrentUser, id: OrderId) -> Result<Order, OrderError> {
        let orders: Vec<Order> =
            storage::read_json_or_default(self.store, keys::USER_ORDERS).await?;
        orders
            .into_iter()
            .find(|o| o.id == id && o.user_id == session.id)
            .ok_or(OrderError::NotFound(id))
    }

    /// Replace the status of one of the signed-in user's orders and stamp
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` when no order matches; the persisted
    /// list is left untouched in that case.
    pub async fn update_status(
        &self,
        session: &CurrentUser,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mut orders: Vec<Order> =
            storage::read_json_or_default(self.store, keys::USER_ORDERS).await?;

        let Some(order) = orders
            .iter_mut()
            .find(|o| o.id == id && o.user_id == session.id)
        else {
            return Err(OrderError::NotFound(id));
        };

        order.status = status;
        order.updated_at = Some(Utc::now());
        let updated = order.clone();

        storage::write_json(self.store, keys::USER_ORDERS, &orders).await?;

        tracing::info!(order_id = %updated.id, status = %updated.status, "order status updated");
        Ok(updated)
    }
}
