use axum::{
    extract::State,
    response::{Json, Response},
};
use enroll_directory::NewAccount;
use enroll_flow::Notice;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    api::helpers::{
        drain_notice, flow_failure, park_notice, AccountView, EntryResponse, ProfileForm,
        LOGIN_ENTRY, REGISTER_ENTRY,
    },
    error::{see_other, ApiError},
    extractors::SessionHandle,
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub notice: Notice,
    pub account: AccountView,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/register
pub async fn registration_entry(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
) -> Json<EntryResponse> {
    Json(EntryResponse {
        notice: drain_notice(&state, session.id).await,
        fields: &["name", "username", "email", "password"],
    })
}

/// POST /v1/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!(username = %req.username, "Registration attempt");

    let request = NewAccount {
        name: req.name,
        username: req.username,
        email: req.email,
        password: req.password,
    };

    match state.enrollment.register(session.id, request).await {
        Ok(account) => Ok(Json(RegisterResponse {
            notice: Notice::registered(),
            account: AccountView::from(&account),
        })),
        Err(err) => Err(flow_failure(&state, session.id, err, REGISTER_ENTRY).await),
    }
}

/// POST /v1/profile
pub async fn submit_profile(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    Json(form): Json<ProfileForm>,
) -> Result<Response, ApiError> {
    match state
        .enrollment
        .submit_profile(session.id, form.into_details())
        .await
    {
        Ok(_profile) => {
            let notice = Notice::profile_saved();
            park_notice(&state, session.id, notice.clone()).await;
            Ok(see_other(LOGIN_ENTRY, notice))
        }
        Err(err) => Err(flow_failure(&state, session.id, err, REGISTER_ENTRY).await),
    }
}
