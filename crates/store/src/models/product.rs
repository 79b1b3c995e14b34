//! Catalog product type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::ProductId;

/// A catalog product.
///
/// The catalog is fixed at build time and immutable at runtime; products are
/// never persisted through the storage port, only referenced from carts,
/// favorites, and orders by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub stock_quantity: u32,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
