//! Catalog commands.

use shoplite_core::ProductId;
use shoplite_store::{StorageBackend, StoreError, StoreState};

/// List the whole catalog.
pub fn list<S: StorageBackend>(state: &StoreState<S>) {
    let catalog = state.catalog();
    tracing::info!("{} products:", catalog.products().len());
    for product in catalog.products() {
        tracing::info!(
            "  [{}] {} - {} ({}, {} in stock)",
            product.id,
            product.name,
            product.price,
            product.category,
            product.stock_quantity
        );
    }
}

/// Show one product in detail, including its favorite state.
///
/// # Errors
///
/// Returns `StoreError::Catalog` when the ID is not in the catalog.
pub async fn show<S: StorageBackend>(state: &StoreState<S>, id: i32) -> Result<(), StoreError> {
    let id = ProductId::new(id);
    let product = state.catalog().product(id)?;
    let favorited = state.favorites().contains(id).await.map_err(StoreError::Storage)?;

    tracing::info!("{} [{}]", product.name, product.id);
    tracing::info!("  {}", product.description);
    tracing::info!("  Price: {}", product.price);
    tracing::info!("  Category: {}", product.category);
    tracing::info!("  In stock: {}", product.stock_quantity);
    tracing::info!("  Favorite: {}", if favorited { "yes" } else { "no" });
    Ok(())
}
