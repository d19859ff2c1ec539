//! Access guard tests.

use super::helpers::*;
use crate::{guard::require_confirmed, AccessState, FlowError, SessionContext, SessionId};
use uuid::Uuid;

#[tokio::test]
async fn test_guard_rejects_anonymous_and_preserves_path() {
    let (_enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let err = require_confirmed(&sessions, session, "/v1/profile")
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::NotLoggedIn));

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(ctx.return_to.as_deref(), Some("/v1/profile"));
}

#[tokio::test]
async fn test_guard_rejects_provisional_state() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();

    // Registered but never logged in: still not allowed through
    let err = require_confirmed(&sessions, session, "/v1/account")
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::NotLoggedIn));

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(ctx.return_to.as_deref(), Some("/v1/account"));
}

#[tokio::test]
async fn test_guard_admits_confirmed_state() {
    let (_enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account_id = Uuid::new_v4();
    sessions.set_confirmed(session, account_id).await.unwrap();

    let admitted = require_confirmed(&sessions, session, "/v1/profile")
        .await
        .unwrap();
    assert_eq!(admitted, account_id);

    // Admission does not overwrite a remembered path
    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(ctx.return_to, None);
}

#[tokio::test]
async fn test_guard_fails_on_dead_session() {
    let (_enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;
    sessions.end(session).await;

    let err = require_confirmed(&sessions, session, "/v1/profile")
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::SessionNotFound(_)));
}

#[test]
fn test_access_state_derivation() {
    let session_id = SessionId(Uuid::new_v4());
    let mut ctx = SessionContext::new(session_id, 0);
    assert_eq!(AccessState::of(&ctx), AccessState::Anonymous);

    let account_id = Uuid::new_v4();
    ctx.provisional = Some(account_id);
    assert_eq!(AccessState::of(&ctx), AccessState::Provisional(account_id));

    // A confirmed pointer wins over a stale provisional one
    ctx.confirmed = Some(account_id);
    assert_eq!(AccessState::of(&ctx), AccessState::Confirmed(account_id));
}
