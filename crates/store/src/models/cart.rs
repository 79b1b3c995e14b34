//! Cart record types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::ProductId;

use super::Product;

/// One line of the cart, as persisted in the `cart` list.
///
/// Name, price, and image are snapshotted from the product at add time, so a
/// cart remains renderable even if the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line refers to.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Decimal,
    /// Product image at add time.
    pub image_url: String,
    /// Units of this product in the cart; always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Build a cart line from a product snapshot.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            id: ProductId::new(1),
            name: "widget".to_owned(),
            price: Decimal::from(100),
            image_url: String::new(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Decimal::from(300));
    }

    #[test]
    fn test_wire_shape() {
        let item = CartItem {
            id: ProductId::new(5),
            name: "widget".to_owned(),
            price: Decimal::from(7999),
            image_url: "https://example.com/w.jpg".to_owned(),
            quantity: 2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["quantity"], 2);
        // Prices travel as JSON numbers, not strings.
        assert!(json["price"].is_number());
    }
}
