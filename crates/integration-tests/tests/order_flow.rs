//! Order scoping, ordering, and status updates.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shoplite_core::{OrderId, OrderStatus, ProductId};
use shoplite_integration_tests::{memory_state, signed_up};
use shoplite_store::StoreError;
use shoplite_store::models::{OrderDraft, OrderItem};
use shoplite_store::services::orders::OrderError;

fn draft(total: i64) -> OrderDraft {
    OrderDraft {
        items: vec![OrderItem {
            product_id: ProductId::new(1),
            product_name: "iPhone 15 Pro".to_owned(),
            quantity: 2,
            price: Decimal::from(100),
        }],
        total_amount: Decimal::from(total),
        shipping_address: "default address".to_owned(),
        payment_method: "online".to_owned(),
    }
}

#[tokio::test]
async fn order_operations_without_a_session_are_unauthenticated() {
    let state = memory_state();
    let err = state.require_session().await.unwrap_err();
    assert!(matches!(err, StoreError::Unauthenticated));
}

#[tokio::test]
async fn created_order_is_pending_with_caller_supplied_total() {
    let state = memory_state();
    let session = signed_up(&state, "13800138000").await;

    // total_amount deliberately disagrees with the line math: the data
    // layer must not recompute it.
    let order = state.orders().create(&session, draft(12345)).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, Decimal::from(12345));
    assert_eq!(order.user_id, session.id);
}

#[tokio::test]
async fn listing_is_scoped_to_the_session_in_creation_order() {
    let state = memory_state();
    let orders = state.orders();

    let alice = signed_up(&state, "13800138000").await;
    state.auth().sign_out().await.unwrap();
    let bob = signed_up(&state, "13900139000").await;

    let a1 = orders.create(&alice, draft(1)).await.unwrap();
    let b1 = orders.create(&bob, draft(2)).await.unwrap();
    let a2 = orders.create(&alice, draft(3)).await.unwrap();

    let alices = orders.list(&alice).await.unwrap();
    assert_eq!(
        alices.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![a1.id, a2.id]
    );

    let bobs = orders.list(&bob).await.unwrap();
    assert_eq!(bobs.iter().map(|o| o.id).collect::<Vec<_>>(), vec![b1.id]);
}

#[tokio::test]
async fn update_status_stamps_updated_at_and_persists() {
    let state = memory_state();
    let session = signed_up(&state, "13800138000").await;
    let orders = state.orders();

    let order = orders.create(&session, draft(1)).await.unwrap();
    assert_eq!(order.updated_at, None);

    let updated = orders
        .update_status(&session, order.id, OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Processing);
    assert!(updated.updated_at.is_some());

    let fetched = orders.get(&session, order.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn updating_a_missing_or_foreign_order_changes_nothing() {
    let state = memory_state();
    let orders = state.orders();

    let alice = signed_up(&state, "13800138000").await;
    state.auth().sign_out().await.unwrap();
    let bob = signed_up(&state, "13900139000").await;

    let order = orders.create(&alice, draft(1)).await.unwrap();

    // Unknown ID.
    assert!(matches!(
        orders
            .update_status(&alice, OrderId::new(42), OrderStatus::Cancelled)
            .await
            .unwrap_err(),
        OrderError::NotFound(_)
    ));

    // Someone else's order looks exactly like a missing one.
    assert!(matches!(
        orders
            .update_status(&bob, order.id, OrderStatus::Cancelled)
            .await
            .unwrap_err(),
        OrderError::NotFound(_)
    ));
    assert!(matches!(
        orders.get(&bob, order.id).await.unwrap_err(),
        OrderError::NotFound(_)
    ));

    let fetched = orders.get(&alice, order.id).await.unwrap();
    assert_eq!(fetched.status, OrderStatus::Pending);
    assert_eq!(fetched.updated_at, None);
}
