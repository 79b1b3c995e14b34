//! Order record types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, OrderStatus, ProductId, UserId};

/// One line of an order.
///
/// Product name and unit price are snapshotted at checkout; later catalog
/// changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// An order, as persisted in the flat `user_orders` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Timestamp-derived identifier, assigned at creation.
    pub id: OrderId,
    /// Owner; every read and update filters on this.
    pub user_id: UserId,
    /// Lines captured from the cart at checkout.
    pub items: Vec<OrderItem>,
    /// Caller-supplied total. The data layer does not recompute it.
    pub total_amount: Decimal,
    /// Lifecycle status; starts as `pending`.
    pub status: OrderStatus,
    pub shipping_address: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    /// Stamped on every status update; absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for creating an order.
///
/// Identity, ownership, status, and timestamps are stamped by the order
/// manager; everything else comes from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub payment_method: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_shape() {
        let order = Order {
            id: OrderId::new(1_700_000_000_000),
            user_id: UserId::from("1699999999999"),
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                product_name: "widget".to_owned(),
                quantity: 2,
                price: Decimal::from(100),
            }],
            total_amount: Decimal::from(200),
            status: OrderStatus::Pending,
            shipping_address: "somewhere".to_owned(),
            payment_method: "online".to_owned(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 1_700_000_000_000_i64);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["items"][0]["product_id"], 1);
        // updated_at stays off the wire until the first status update.
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_order_deserializes_without_updated_at() {
        let json = r#"{
            "id": 1700000000000,
            "user_id": "1699999999999",
            "items": [],
            "total_amount": 0,
            "status": "pending",
            "shipping_address": "",
            "payment_method": "",
            "created_at": "2024-01-15T10:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.updated_at, None);
    }
}
