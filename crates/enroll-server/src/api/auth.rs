use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use enroll_flow::{Credentials, Notice, NoticeKind};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    api::helpers::{
        drain_notice, flow_failure, park_notice, AccountView, EntryResponse, ProfileView,
        ProfileViewResponse, LOGIN_ENTRY,
    },
    error::{see_other, ApiError},
    extractors::SessionHandle,
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/login
pub async fn login_entry(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
) -> Json<EntryResponse> {
    Json(EntryResponse {
        notice: drain_notice(&state, session.id).await,
        fields: &["username", "password"],
    })
}

/// POST /v1/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    tracing::info!(username = %req.username, "Login attempt");

    let credentials = Credentials {
        username: req.username,
        password: req.password,
    };

    match state.enrollment.login(session.id, credentials).await {
        Ok(outcome) => {
            // Replay the path the guard captured before sending the caller
            // to login; otherwise render the profile straight away.
            if let Some(path) = outcome.return_to {
                let notice = Notice::new(NoticeKind::Success, "Logged in.");
                park_notice(&state, session.id, notice.clone()).await;
                Ok(see_other(&path, notice))
            } else {
                Ok(Json(ProfileViewResponse {
                    notice: None,
                    account: AccountView::from(&outcome.account),
                    profile: ProfileView::from(&outcome.profile),
                })
                .into_response())
            }
        }
        Err(err) => Err(flow_failure(&state, session.id, err, LOGIN_ENTRY).await),
    }
}

/// POST /v1/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    session: SessionHandle,
) -> Result<Response, ApiError> {
    match state.enrollment.logout(session.id).await {
        Ok(()) => {
            let notice = Notice::logged_out();
            park_notice(&state, session.id, notice.clone()).await;
            Ok(see_other(LOGIN_ENTRY, notice))
        }
        Err(err) => Err(flow_failure(&state, session.id, err, LOGIN_ENTRY).await),
    }
}
