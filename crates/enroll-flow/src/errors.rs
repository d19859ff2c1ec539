//! Flow error types and their user-visible notices.

use crate::types::{Notice, NoticeKind};
use enroll_directory::DirectoryError;
use thiserror::Error;
use uuid::Uuid;

/// Flow errors
#[derive(Debug, Error)]
pub enum FlowError {
    /// Session id does not map to a live session
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Profile submitted without a registration in progress
    #[error("No registration in progress for this session")]
    NoProvisionalIdentity,

    /// Login found an account with no linked profile; the orphaned account
    /// has been deleted and the caller must re-register
    #[error("Account had no linked profile and was removed")]
    ProfileMissing,

    /// Gated operation attempted without a confirmed session pointer
    #[error("Login required")]
    NotLoggedIn,

    /// Directory error
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl FlowError {
    /// The tagged notice the presentation layer renders for this failure
    pub fn notice(&self) -> Notice {
        match self {
            FlowError::SessionNotFound(_) => Notice::new(
                NoticeKind::AuthFailed,
                "Your session has expired. Start again.",
            ),
            FlowError::NoProvisionalIdentity => Notice::new(
                NoticeKind::NotFound,
                "Register before submitting your details.",
            ),
            FlowError::ProfileMissing => {
                Notice::new(NoticeKind::NotFound, "Please re-register yourself.")
            }
            FlowError::NotLoggedIn => {
                Notice::new(NoticeKind::AuthFailed, "You must log in first.")
            }
            FlowError::Directory(DirectoryError::DuplicateIdentity { field }) => {
                if *field == "email" {
                    Notice::new(
                        NoticeKind::DuplicateIdentity,
                        "Email is already in use. Use a different email address.",
                    )
                } else {
                    Notice::new(
                        NoticeKind::DuplicateIdentity,
                        "Username or email is already registered.",
                    )
                }
            }
            FlowError::Directory(DirectoryError::AuthFailed) => {
                Notice::new(NoticeKind::AuthFailed, "Invalid username or password.")
            }
            FlowError::Directory(DirectoryError::ProfileAlreadyExists(_)) => Notice::new(
                NoticeKind::DuplicateIdentity,
                "Details already submitted. Log in to view or edit them.",
            ),
            FlowError::Directory(DirectoryError::AccountNotFound(_))
            | FlowError::Directory(DirectoryError::ProfileNotFound(_)) => {
                Notice::new(NoticeKind::NotFound, "Record not found.")
            }
            FlowError::Directory(DirectoryError::Validation(message)) => {
                Notice::new(NoticeKind::StorageError, message.clone())
            }
            FlowError::Directory(DirectoryError::Storage(_))
            | FlowError::Directory(DirectoryError::Crypto(_)) => Notice::new(
                NoticeKind::StorageError,
                "Something went wrong. Please try again.",
            ),
        }
    }
}

/// Result type for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_gets_specific_notice() {
        let err = FlowError::Directory(DirectoryError::DuplicateIdentity { field: "email" });
        let notice = err.notice();
        assert_eq!(notice.kind, NoticeKind::DuplicateIdentity);
        assert!(notice.message.contains("Email"));
    }

    #[test]
    fn test_storage_failure_never_reads_as_success() {
        let err = FlowError::Directory(DirectoryError::Storage(
            enroll_storage::StorageError::Database("disk on fire".to_string()),
        ));
        assert_eq!(err.notice().kind, NoticeKind::StorageError);
    }

    #[test]
    fn test_guard_rejection_notice() {
        assert_eq!(FlowError::NotLoggedIn.notice().kind, NoticeKind::AuthFailed);
    }
}
