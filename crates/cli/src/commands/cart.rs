//! Cart commands.

use shoplite_core::ProductId;
use shoplite_store::{StorageBackend, StoreError, StoreState};

/// Show cart contents and totals.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be read.
pub async fn show<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    let cart = state.cart();
    let items = cart.items().await.map_err(StoreError::Storage)?;

    if items.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in &items {
        tracing::info!(
            "  [{}] {} x{} @ {} = {}",
            item.id,
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    tracing::info!(
        "Total: {} ({} items)",
        cart.total_price().await.map_err(StoreError::Storage)?,
        cart.total_items().await.map_err(StoreError::Storage)?
    );
    Ok(())
}

/// Add a product to the cart (increments if already present).
///
/// # Errors
///
/// Returns `StoreError::Catalog` when the ID is not in the catalog.
pub async fn add<S: StorageBackend>(
    state: &StoreState<S>,
    id: i32,
    quantity: u32,
) -> Result<(), StoreError> {
    let product = state.catalog().product(ProductId::new(id))?;
    state
        .cart()
        .add(product, quantity)
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Added {} x{} to the cart", product.name, quantity.max(1));
    Ok(())
}

/// Set the quantity of a cart line. Quantities below 1 are rejected.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn set<S: StorageBackend>(
    state: &StoreState<S>,
    id: i32,
    quantity: u32,
) -> Result<(), StoreError> {
    if quantity < 1 {
        tracing::warn!("Quantity must be at least 1; cart unchanged");
        return Ok(());
    }
    state
        .cart()
        .set_quantity(ProductId::new(id), quantity)
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Set product {id} to quantity {quantity}");
    Ok(())
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn remove<S: StorageBackend>(state: &StoreState<S>, id: i32) -> Result<(), StoreError> {
    state
        .cart()
        .remove(ProductId::new(id))
        .await
        .map_err(StoreError::Storage)?;
    tracing::info!("Removed product {id} from the cart");
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be written.
pub async fn clear<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    state.cart().clear().await.map_err(StoreError::Storage)?;
    tracing::info!("Cart cleared");
    Ok(())
}
