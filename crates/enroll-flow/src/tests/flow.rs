//! End-to-end flow tests over real storage.

use super::helpers::*;
use crate::{AccessState, Credentials, FlowError};
use chrono::NaiveDate;
use enroll_directory::{
    AccountUpdate, CredentialStore, DirectoryError, ProfileStore,
};

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_sets_provisional_pointer_only() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account = enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(ctx.provisional, Some(account.account_id));
    assert_eq!(ctx.confirmed, None);
    assert_eq!(AccessState::of(&ctx), AccessState::Provisional(account.account_id));
}

#[tokio::test]
async fn test_duplicate_registration_leaves_no_partial_state() {
    let (enrollment, sessions, directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();

    let other = sessions.open().await;
    let err = enrollment
        .register(other, new_account("a1", "second@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FlowError::Directory(DirectoryError::DuplicateIdentity { field: "username" })
    ));

    // The losing session learned nothing
    let ctx = sessions.context(other).await.unwrap();
    assert_eq!(ctx.provisional, None);

    // The rejected email was never indexed
    assert!(enrollment
        .register(other, new_account("b2", "second@x.com"))
        .await
        .is_ok());

    // The original account is intact
    assert!(directory.authenticate("a1", "p").await.is_ok());
}

#[tokio::test]
async fn test_submit_profile_requires_registration_in_progress() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let err = enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::NoProvisionalIdentity));
}

#[tokio::test]
async fn test_submit_profile_failure_is_surfaced_not_swallowed() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();

    // A second submission must fail loudly, not report success
    let err = enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FlowError::Directory(DirectoryError::ProfileAlreadyExists(_))
    ));
}

#[tokio::test]
async fn test_full_scenario_register_profile_logout_login() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account = enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();
    enrollment.logout(session).await.unwrap();

    let outcome = enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap();

    assert_eq!(outcome.account.account_id, account.account_id);
    assert_eq!(outcome.profile.student_id, 100);
    assert_eq!(
        outcome.profile.date_of_birth,
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    );

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(AccessState::of(&ctx), AccessState::Confirmed(account.account_id));
}

#[tokio::test]
async fn test_login_with_bad_credentials_modifies_nothing() {
    let (enrollment, sessions, directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account = enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();

    let err = enrollment
        .login(session, credentials("a1", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FlowError::Directory(DirectoryError::AuthFailed)
    ));

    // Account and profile survive a failed login
    assert!(directory.find_account(account.account_id).await.is_ok());
    assert!(directory
        .find_profile_by_owner(account.account_id)
        .await
        .is_ok());

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(ctx.confirmed, None);
}

#[tokio::test]
async fn test_abandoned_registration_reconciled_on_login() {
    let (enrollment, sessions, directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account = enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    // No profile submitted: registration abandoned here.

    let err = enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::ProfileMissing));

    // The orphaned account is gone entirely
    assert!(matches!(
        directory.find_account(account.account_id).await,
        Err(DirectoryError::AccountNotFound(_))
    ));
    assert!(matches!(
        directory.authenticate("a1", "p").await,
        Err(DirectoryError::AuthFailed)
    ));
    assert!(matches!(
        directory.find_profile_by_owner(account.account_id).await,
        Err(DirectoryError::ProfileNotFound(_))
    ));

    // Session pointers were cleared
    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(AccessState::of(&ctx), AccessState::Anonymous);

    // The username is free to re-register
    assert!(enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_edit_is_all_or_nothing_on_email_collision() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();

    // Account B holds the email we will collide with
    let session_b = sessions.open().await;
    enrollment
        .register(session_b, new_account("b2", "b@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session_b, profile_details())
        .await
        .unwrap();

    // Account A, fully enrolled and logged in
    let session_a = sessions.open().await;
    enrollment
        .register(session_a, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session_a, profile_details())
        .await
        .unwrap();
    enrollment
        .login(session_a, credentials("a1", "p"))
        .await
        .unwrap();

    let mut changed = profile_details();
    changed.student_id = 999;
    changed.branch = "EEE".to_string();

    let err = enrollment
        .edit(
            session_a,
            "/v1/profile",
            AccountUpdate {
                name: "Changed".to_string(),
                email: "b@x.com".to_string(),
            },
            changed,
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FlowError::Directory(DirectoryError::DuplicateIdentity { field: "email" })
    ));

    // Neither record changed
    let (account, profile) = enrollment.view(session_a, "/v1/profile").await.unwrap();
    assert_eq!(account.name, "A");
    assert_eq!(account.email, "a@x.com");
    assert_eq!(profile.student_id, 100);
    assert_eq!(profile.branch, "CSE");
}

#[tokio::test]
async fn test_edit_applies_both_records_and_moves_email_index() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();
    enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap();

    let mut changed = profile_details();
    changed.student_id = 200;

    let (account, profile) = enrollment
        .edit(
            session,
            "/v1/profile",
            AccountUpdate {
                name: "Renamed".to_string(),
                email: "new@x.com".to_string(),
            },
            changed,
        )
        .await
        .unwrap();

    assert_eq!(account.name, "Renamed");
    assert_eq!(account.email, "new@x.com");
    assert_eq!(profile.student_id, 200);

    // The old email is free again
    let other = sessions.open().await;
    assert!(enrollment
        .register(other, new_account("c3", "a@x.com"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_delete_removes_both_records_and_clears_session() {
    let (enrollment, sessions, directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    let account = enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();
    enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap();

    enrollment
        .delete_account(session, "/v1/account")
        .await
        .unwrap();

    assert!(matches!(
        directory.find_account(account.account_id).await,
        Err(DirectoryError::AccountNotFound(_))
    ));
    assert!(matches!(
        directory.find_profile_by_owner(account.account_id).await,
        Err(DirectoryError::ProfileNotFound(_))
    ));

    // The session no longer points at the deleted account; a subsequent
    // gated request is turned away.
    let err = enrollment.view(session, "/v1/profile").await.unwrap_err();
    assert!(matches!(err, FlowError::NotLoggedIn));
}

#[tokio::test]
async fn test_logout_resets_to_anonymous() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();
    enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap();

    enrollment.logout(session).await.unwrap();

    let ctx = sessions.context(session).await.unwrap();
    assert_eq!(AccessState::of(&ctx), AccessState::Anonymous);
}

#[tokio::test]
async fn test_login_returns_captured_path_for_redirect() {
    let (enrollment, sessions, _directory, _tmp) = create_test_enrollment();
    let session = sessions.open().await;

    enrollment
        .register(session, new_account("a1", "a@x.com"))
        .await
        .unwrap();
    enrollment
        .submit_profile(session, profile_details())
        .await
        .unwrap();

    // A gated request before login records where the caller wanted to go
    let err = enrollment.view(session, "/v1/profile/edit").await.unwrap_err();
    assert!(matches!(err, FlowError::NotLoggedIn));

    let outcome = enrollment
        .login(session, credentials("a1", "p"))
        .await
        .unwrap();
    assert_eq!(outcome.return_to.as_deref(), Some("/v1/profile/edit"));

    // The captured path is one-shot
    enrollment.logout(session).await.unwrap();
    enrollment
        .login(session, credentials("a1", "p"))
        .await
        .map(|o| assert_eq!(o.return_to, None))
        .unwrap();
}
