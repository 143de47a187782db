use credential_draft::utils::Config;
use credential_draft::{CredentialDraft, DraftStore, Session};

use crate::helpers::{get_random_email, TestSession};

#[tokio::test]
async fn test_build_with_default_config_starts_empty() {
    let harness = TestSession::new();
    let session = Session::build(harness.state.clone()).await;
    assert_eq!(CredentialDraft::default(), harness.draft().await);
    session.end().await;
}

#[tokio::test]
async fn test_prefill_email_goes_through_the_setter() {
    let remembered = get_random_email();
    let harness = TestSession::with_config(Config::new(Some(remembered.clone()), true));

    // Subscribe before the session starts, so the prefill is observed like
    // any other write.
    let mut rx = harness.subscribe().await;
    let _session = Session::build(harness.state.clone()).await;

    rx.changed().await.unwrap();
    assert_eq!(remembered, rx.borrow().email());
    assert!(rx.borrow().password().is_empty());
}

#[tokio::test]
async fn test_session_end_resets_the_draft() {
    let harness = TestSession::new();
    let session = Session::build(harness.state.clone()).await;

    harness.set_email("user@example.com").await;
    harness.set_password("hunter2").await;
    session.end().await;

    assert_eq!(CredentialDraft::default(), harness.draft().await);
}

#[tokio::test]
async fn test_session_end_can_be_configured_to_keep_the_draft() {
    let harness = TestSession::with_config(Config::new(None, false));
    let session = Session::build(harness.state.clone()).await;

    harness.set_email("user@example.com").await;
    harness.set_password("hunter2").await;
    session.end().await;

    assert_eq!("user@example.com", harness.email().await);
    assert_eq!("hunter2", harness.password().await);
}

#[tokio::test]
async fn test_reset_clears_both_fields_and_notifies() {
    let harness = TestSession::new();
    harness.set_email("user@example.com").await;
    harness.set_password("hunter2").await;

    let mut rx = harness.subscribe().await;
    harness.state.draft_store.write().await.reset().await;

    rx.changed().await.unwrap();
    assert_eq!(CredentialDraft::default(), *rx.borrow());
}
