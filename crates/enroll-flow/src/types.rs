//! Flow type definitions.

use enroll_directory::{Account, Profile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque per-browser session identifier (rides in the session cookie)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-session identity pointers and one-shot state
///
/// `provisional` points at an account that just registered and may not yet
/// have a profile. `confirmed` is set only by a login that also resolved a
/// profile; it is the only pointer the access guard trusts.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: SessionId,
    pub provisional: Option<Uuid>,
    pub confirmed: Option<Uuid>,
    /// Originally requested path captured by the guard, replayed after login
    pub return_to: Option<String>,
    /// One-shot notice drained by the next entry-point render
    pub notice: Option<Notice>,
    pub created_at: u64,
}

impl SessionContext {
    pub fn new(session_id: SessionId, created_at: u64) -> Self {
        Self {
            session_id,
            provisional: None,
            confirmed: None,
            return_to: None,
            notice: None,
            created_at,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login outcome
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub account: Account,
    pub profile: Profile,
    /// Path the guard captured before redirecting to login, if any
    pub return_to: Option<String>,
}

/// Outcome tag rendered generically by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    DuplicateIdentity,
    AuthFailed,
    NotFound,
    StorageError,
}

// Re-export current_timestamp through the directory crate
pub use enroll_directory::current_timestamp;

/// One-shot user-visible notice
///
/// Every flow step resolves to at most one of these; the server either
/// returns it inline or parks it in the session across a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Registration succeeded; prompt for profile details
    pub fn registered() -> Self {
        Self::new(
            NoticeKind::Success,
            "Account registered. Enter your profile details.",
        )
    }

    /// Profile saved; direct the caller to log in
    pub fn profile_saved() -> Self {
        Self::new(
            NoticeKind::Success,
            "Your details have been saved. Log in to view or edit them.",
        )
    }

    /// Edit applied
    pub fn updated() -> Self {
        Self::new(NoticeKind::Success, "Your details have been updated.")
    }

    /// Account and profile removed
    pub fn deleted() -> Self {
        Self::new(NoticeKind::Success, "Your data has been deleted.")
    }

    /// Session ended
    pub fn logged_out() -> Self {
        Self::new(NoticeKind::Success, "You are logged out.")
    }
}
