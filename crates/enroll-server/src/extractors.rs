use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use enroll_flow::SessionId;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Extractor for the request's session
///
/// The session id is resolved by the session middleware and parked in
/// request extensions; handlers only ever see this handle.
#[derive(Debug, Clone, Copy)]
pub struct SessionHandle {
    pub id: SessionId,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for SessionHandle {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!("session middleware not installed"))
            })?;

        Ok(SessionHandle { id })
    }
}
