//! Cart semantics and the checkout composition.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shoplite_core::{OrderStatus, ProductId};
use shoplite_integration_tests::{memory_state, signed_up};
use shoplite_store::{StorageBackend, StoreError, StoreEvent};

#[tokio::test]
async fn adding_the_same_product_twice_increments() {
    let state = memory_state();
    let product = state.catalog().product(ProductId::new(1)).unwrap();

    state.cart().add(product, 1).await.unwrap();
    let items = state.cart().add(product, 1).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items.first().unwrap().quantity, 2);
}

#[tokio::test]
async fn quantities_below_one_are_rejected() {
    let state = memory_state();
    let product = state.catalog().product(ProductId::new(1)).unwrap();

    state.cart().add(product, 3).await.unwrap();
    let items = state.cart().set_quantity(product.id, 0).await.unwrap();
    assert_eq!(items.first().unwrap().quantity, 3);
}

#[tokio::test]
async fn clearing_empties_the_cart_and_removes_the_key() {
    let state = memory_state();
    let product = state.catalog().product(ProductId::new(1)).unwrap();

    state.cart().add(product, 1).await.unwrap();
    state.cart().clear().await.unwrap();

    assert!(state.cart().items().await.unwrap().is_empty());
    assert_eq!(state.store().get("cart").await.unwrap(), None);
}

#[tokio::test]
async fn checkout_turns_the_cart_into_a_pending_order() {
    let state = memory_state();
    let session = signed_up(&state, "13800138000").await;

    let phone = state.catalog().product(ProductId::new(1)).unwrap();
    let laptop = state.catalog().product(ProductId::new(4)).unwrap();
    state.cart().add(phone, 2).await.unwrap();
    state.cart().add(laptop, 1).await.unwrap();

    let order = state
        .checkout(&session, "1 Main St".into(), "online".into())
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(
        order.total_amount,
        phone.price * Decimal::from(2) + laptop.price
    );

    // The cart was cleared by the second write of the checkout pair.
    assert!(state.cart().items().await.unwrap().is_empty());

    // And the order is visible through the normal read path.
    let listed = state.orders().list(&session).await.unwrap();
    assert_eq!(listed, vec![order]);
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_rejected() {
    let state = memory_state();
    let session = signed_up(&state, "13800138000").await;

    let err = state
        .checkout(&session, "1 Main St".into(), "online".into())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptyCart));
}

#[tokio::test]
async fn cart_mutations_signal_listeners() {
    let state = memory_state();
    let mut rx = state.events().subscribe();

    let product = state.catalog().product(ProductId::new(1)).unwrap();
    state.cart().add(product, 1).await.unwrap();
    state.favorites().toggle(product.id).await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), StoreEvent::CartUpdated);
    assert_eq!(rx.recv().await.unwrap(), StoreEvent::FavoritesUpdated);
}
