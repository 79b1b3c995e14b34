//! Order commands.
//!
//! Every order operation requires a session; a missing one surfaces as
//! `StoreError::Unauthenticated` before any storage is touched.

use thiserror::Error;

use shoplite_core::{OrderId, OrderStatus};
use shoplite_store::models::Order;
use shoplite_store::{StorageBackend, StoreError, StoreState};

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrderCommandError {
    /// The status argument is not a known order status.
    #[error(
        "Invalid status: {0}. Valid statuses: pending, processing, shipped, completed, cancelled"
    )]
    InvalidStatus(String),

    /// Data-layer failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn describe(order: &Order) {
    tracing::info!(
        "Order {} - {} ({} items, total {})",
        order.id,
        order.status,
        order.items.len(),
        order.total_amount
    );
}

/// List the signed-in user's orders, oldest first.
///
/// # Errors
///
/// Returns `StoreError::Unauthenticated` when no session is persisted.
pub async fn list<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    let session = state.require_session().await?;
    let orders = state.orders().list(&session).await?;

    if orders.is_empty() {
        tracing::info!("No orders yet");
        return Ok(());
    }

    for order in &orders {
        describe(order);
    }
    Ok(())
}

/// Show one order in detail.
///
/// # Errors
///
/// Returns `StoreError::Unauthenticated` without a session and
/// `StoreError::Order` when the ID does not belong to this user.
pub async fn show<S: StorageBackend>(state: &StoreState<S>, id: i64) -> Result<(), StoreError> {
    let session = state.require_session().await?;
    let order = state.orders().get(&session, OrderId::new(id)).await?;

    describe(&order);
    tracing::info!("  Placed: {}", order.created_at);
    if let Some(updated_at) = order.updated_at {
        tracing::info!("  Updated: {updated_at}");
    }
    tracing::info!("  Ship to: {}", order.shipping_address);
    tracing::info!("  Payment: {}", order.payment_method);
    for item in &order.items {
        tracing::info!(
            "  [{}] {} x{} @ {}",
            item.product_id,
            item.product_name,
            item.quantity,
            item.price
        );
    }
    Ok(())
}

/// Create an order from the cart, then clear the cart.
///
/// # Errors
///
/// Returns `StoreError::Unauthenticated` without a session and
/// `StoreError::EmptyCart` when there is nothing to check out.
pub async fn checkout<S: StorageBackend>(
    state: &StoreState<S>,
    address: String,
    payment: String,
) -> Result<(), StoreError> {
    let session = state.require_session().await?;
    let order = state.checkout(&session, address, payment).await?;

    tracing::info!("Order placed!");
    describe(&order);
    Ok(())
}

/// Update an order's status.
///
/// # Errors
///
/// Returns `OrderCommandError::InvalidStatus` for an unknown status name and
/// data-layer errors otherwise.
pub async fn set_status<S: StorageBackend>(
    state: &StoreState<S>,
    id: i64,
    status: &str,
) -> Result<(), OrderCommandError> {
    let status: OrderStatus = status
        .parse()
        .map_err(|_| OrderCommandError::InvalidStatus(status.to_owned()))?;

    let session = state.require_session().await?;
    let order = state
        .orders()
        .update_status(&session, OrderId::new(id), status)
        .await
        .map_err(StoreError::Order)?;

    tracing::info!("Order {} is now {}", order.id, order.status);
    Ok(())
}
