//! Favorites commands.

use shoplite_core::ProductId;
use shoplite_store::{StorageBackend, StoreError, StoreState};

/// List favorite products with their catalog details where still listed.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the profile cannot be read.
pub async fn list<S: StorageBackend>(state: &StoreState<S>) -> Result<(), StoreError> {
    let ids = state
        .favorites()
        .list()
        .await
        .map_err(StoreError::Storage)?;

    if ids.is_empty() {
        tracing::info!("No favorites yet");
        return Ok(());
    }

    let catalog = state.catalog();
    for id in ids {
        match catalog.product(id) {
            Ok(product) => tracing::info!("  [{}] {} - {}", product.id, product.name, product.price),
            Err(_) => tracing::info!("  [{id}] (no longer in the catalog)"),
        }
    }
    Ok(())
}

/// Toggle a product's favorite state.
///
/// # Errors
///
/// Returns `StoreError::Catalog` when the ID is not in the catalog.
pub async fn toggle<S: StorageBackend>(state: &StoreState<S>, id: i32) -> Result<(), StoreError> {
    let id = ProductId::new(id);
    // Toggling is only offered from product views, so unknown IDs are an
    // input error here rather than a silent list entry.
    let product = state.catalog().product(id)?;

    let favorited = state
        .favorites()
        .toggle(id)
        .await
        .map_err(StoreError::Storage)?;

    if favorited {
        tracing::info!("Added {} to favorites", product.name);
    } else {
        tracing::info!("Removed {} from favorites", product.name);
    }
    Ok(())
}
