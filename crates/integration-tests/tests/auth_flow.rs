//! Sign-up, sign-in, and sign-out flows.

#![allow(clippy::unwrap_used)]

use shoplite_integration_tests::memory_state;
use shoplite_store::services::auth::AuthError;

#[tokio::test]
async fn sign_up_then_sign_in_yields_matching_session() {
    let state = memory_state();
    let auth = state.auth();

    let created = auth.sign_up("13800138000", "s3cret").await.unwrap();
    auth.sign_out().await.unwrap();
    assert_eq!(auth.current().await.unwrap(), None);

    let session = auth.sign_in("13800138000", "s3cret").await.unwrap();
    assert_eq!(session.id, created.user.id);
    assert_eq!(auth.current().await.unwrap(), Some(session));
}

#[tokio::test]
async fn duplicate_phone_is_rejected_without_side_effects() {
    let state = memory_state();
    let auth = state.auth();

    let first = auth.sign_up("13800138000", "first").await.unwrap();
    let err = auth.sign_up("13800138000", "second").await.unwrap_err();
    assert!(matches!(err, AuthError::PhoneTaken));

    // The failed sign-up neither replaced the account nor the session.
    auth.sign_out().await.unwrap();
    assert!(auth.sign_in("13800138000", "second").await.is_err());
    let session = auth.sign_in("13800138000", "first").await.unwrap();
    assert_eq!(session.id, first.user.id);
}

#[tokio::test]
async fn bad_credentials_do_not_create_a_session() {
    let state = memory_state();
    let auth = state.auth();

    auth.sign_up("13800138000", "right").await.unwrap();
    auth.sign_out().await.unwrap();

    assert!(matches!(
        auth.sign_in("13800138000", "wrong").await.unwrap_err(),
        AuthError::InvalidCredentials
    ));
    assert!(matches!(
        auth.sign_in("13900139000", "right").await.unwrap_err(),
        AuthError::InvalidCredentials
    ));
    assert_eq!(auth.current().await.unwrap(), None);
}

#[tokio::test]
async fn sign_out_is_idempotent() {
    let state = memory_state();
    let auth = state.auth();

    assert!(auth.sign_out().await.is_ok());
    auth.sign_up("13800138000", "pw").await.unwrap();
    assert!(auth.sign_out().await.is_ok());
    assert!(auth.sign_out().await.is_ok());
}

#[tokio::test]
async fn two_accounts_signed_up_back_to_back_get_distinct_ids() {
    let state = memory_state();
    let auth = state.auth();

    let a = auth.sign_up("13800138000", "pw").await.unwrap();
    auth.sign_out().await.unwrap();
    let b = auth.sign_up("13900139000", "pw").await.unwrap();

    assert_ne!(a.user.id, b.user.id);
}
