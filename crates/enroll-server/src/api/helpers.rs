//! Shared view models and response plumbing for the API handlers.

use chrono::NaiveDate;
use enroll_directory::{Account, DirectoryError, Profile, ProfileDetails};
use enroll_flow::{FlowError, Notice, SessionId};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Registration entry point (form + duplicate-identity redirect target)
pub const REGISTER_ENTRY: &str = "/v1/register";

/// Login entry point (guard and auth-failure redirect target)
pub const LOGIN_ENTRY: &str = "/v1/login";

/// Edit form entry point (edit-failure redirect target)
pub const EDIT_ENTRY: &str = "/v1/profile/edit";

/// Rendered profile view
pub const PROFILE_VIEW: &str = "/v1/profile";

/// Format a date of birth for display, e.g. "Jan 01 2000"
pub fn format_date_of_birth(date: NaiveDate) -> String {
    date.format("%b %d %Y").to_string()
}

// ============================================================================
// View Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AccountView {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl AccountView {
    pub fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub student_id: u32,
    /// Display-formatted date of birth ("Jan 01 2000")
    pub date_of_birth: String,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
}

impl ProfileView {
    pub fn from(profile: &Profile) -> Self {
        Self {
            student_id: profile.student_id,
            date_of_birth: format_date_of_birth(profile.date_of_birth),
            gender: profile.gender.clone(),
            year: profile.year.clone(),
            branch: profile.branch.clone(),
            college: profile.college.clone(),
            address: profile.address.clone(),
            contact: profile.contact.clone(),
        }
    }
}

/// Account plus rendered profile, the body of every logged-in view
#[derive(Debug, Serialize)]
pub struct ProfileViewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub account: AccountView,
    pub profile: ProfileView,
}

/// Entry-point form descriptor with any pending one-shot notice
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub fields: &'static [&'static str],
}

/// Profile form fields as submitted by the caller
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub student_id: u32,
    /// ISO date ("2000-01-01")
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
}

impl ProfileForm {
    pub fn into_details(self) -> ProfileDetails {
        ProfileDetails {
            student_id: self.student_id,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            year: self.year,
            branch: self.branch,
            college: self.college,
            address: self.address,
            contact: self.contact,
        }
    }
}

// ============================================================================
// Response plumbing
// ============================================================================

/// Drain the session's one-shot notice, if any
pub async fn drain_notice(state: &AppState, session: SessionId) -> Option<Notice> {
    state.sessions.take_notice(session).await.ok().flatten()
}

/// Park a one-shot notice for the next entry-point render
pub async fn park_notice(state: &AppState, session: SessionId, notice: Notice) {
    if let Err(err) = state.sessions.set_notice(session, notice).await {
        tracing::debug!("Could not park notice: {}", err);
    }
}

/// Map a flow failure to its redirect + notice
///
/// Guard and credential failures always land on the login entry, and the
/// reconciliation/no-registration failures on the registration entry,
/// regardless of the operation that raised them; everything else goes back
/// to the entry the failing operation came from.
pub async fn flow_failure(
    state: &AppState,
    session: SessionId,
    err: FlowError,
    entry: &'static str,
) -> ApiError {
    let to = match &err {
        FlowError::NotLoggedIn | FlowError::SessionNotFound(_) => LOGIN_ENTRY,
        FlowError::Directory(DirectoryError::AuthFailed) => LOGIN_ENTRY,
        FlowError::ProfileMissing | FlowError::NoProvisionalIdentity => REGISTER_ENTRY,
        _ => entry,
    };

    let notice = err.notice();
    park_notice(state, session, notice.clone()).await;

    ApiError::Redirect {
        to: to.to_string(),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_of_birth() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(format_date_of_birth(date), "Jan 01 2000");

        let date = NaiveDate::from_ymd_opt(1998, 12, 25).unwrap();
        assert_eq!(format_date_of_birth(date), "Dec 25 1998");
    }
}
