use axum::{
    extract::State,
    http::Uri,
    response::{Json, Response},
};
use chrono::NaiveDate;
use enroll_directory::AccountUpdate;
use enroll_flow::Notice;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    api::helpers::{
        drain_notice, flow_failure, park_notice, AccountView, ProfileForm, ProfileView,
        ProfileViewResponse, EDIT_ENTRY, LOGIN_ENTRY, PROFILE_VIEW, REGISTER_ENTRY,
    },
    error::{see_other, ApiError},
    extractors::SessionHandle,
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub name: String,
    pub email: String,
    pub student_id: u32,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
}

/// Edit form prefilled with the current values (dates stay ISO for the form)
#[derive(Debug, Serialize)]
pub struct EditFormResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub name: String,
    pub email: String,
    pub student_id: u32,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/profile
pub async fn show_profile(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    uri: Uri,
) -> Result<Json<ProfileViewResponse>, ApiError> {
    match state.enrollment.view(session.id, uri.path()).await {
        Ok((account, profile)) => Ok(Json(ProfileViewResponse {
            notice: drain_notice(&state, session.id).await,
            account: AccountView::from(&account),
            profile: ProfileView::from(&profile),
        })),
        Err(err) => Err(flow_failure(&state, session.id, err, LOGIN_ENTRY).await),
    }
}

/// GET /v1/profile/edit
pub async fn edit_entry(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    uri: Uri,
) -> Result<Json<EditFormResponse>, ApiError> {
    match state.enrollment.view(session.id, uri.path()).await {
        Ok((account, profile)) => Ok(Json(EditFormResponse {
            notice: drain_notice(&state, session.id).await,
            name: account.name,
            email: account.email,
            student_id: profile.student_id,
            date_of_birth: profile.date_of_birth,
            gender: profile.gender,
            year: profile.year,
            branch: profile.branch,
            college: profile.college,
            address: profile.address,
            contact: profile.contact,
        })),
        Err(err) => Err(flow_failure(&state, session.id, err, LOGIN_ENTRY).await),
    }
}

/// PUT /v1/profile
pub async fn edit_profile(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    uri: Uri,
    Json(req): Json<EditRequest>,
) -> Result<Response, ApiError> {
    let update = AccountUpdate {
        name: req.name,
        email: req.email,
    };
    let details = ProfileForm {
        student_id: req.student_id,
        date_of_birth: req.date_of_birth,
        gender: req.gender,
        year: req.year,
        branch: req.branch,
        college: req.college,
        address: req.address,
        contact: req.contact,
    }
    .into_details();

    match state
        .enrollment
        .edit(session.id, uri.path(), update, details)
        .await
    {
        Ok((_account, _profile)) => {
            let notice = Notice::updated();
            park_notice(&state, session.id, notice.clone()).await;
            Ok(see_other(PROFILE_VIEW, notice))
        }
        Err(err) => Err(flow_failure(&state, session.id, err, EDIT_ENTRY).await),
    }
}

/// DELETE /v1/account
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    uri: Uri,
) -> Result<Response, ApiError> {
    match state.enrollment.delete_account(session.id, uri.path()).await {
        Ok(()) => {
            let notice = Notice::deleted();
            park_notice(&state, session.id, notice.clone()).await;
            Ok(see_other(REGISTER_ENTRY, notice))
        }
        Err(err) => Err(flow_failure(&state, session.id, err, LOGIN_ENTRY).await),
    }
}
