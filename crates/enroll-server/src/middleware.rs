use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, Response, StatusCode},
    middleware::Next,
};
use enroll_flow::SessionId;
use std::sync::Arc;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the browser session cookie
pub const SESSION_COOKIE: &str = "enroll_session";

/// Session cookie middleware
///
/// Resolves the request's session from the cookie, opening a fresh one when
/// the cookie is missing or stale, and parks the session id in request
/// extensions for the handlers. Sets the cookie on the way out whenever a
/// new session was opened.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let from_cookie = cookie_session_id(req.headers());

    let session_id = match from_cookie {
        Some(id) if state.sessions.exists(SessionId(id)).await => SessionId(id),
        _ => state.sessions.open().await,
    };

    req.extensions_mut().insert(session_id);

    let mut response = next.run(req).await;

    if from_cookie != Some(session_id.0) {
        let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id.0);
        if let Ok(value) = cookie.parse() {
            response.headers_mut().insert(header::SET_COOKIE, value);
        } else {
            tracing::warn!("Failed to create session cookie header");
        }
    }

    Ok(response)
}

/// Extract the session id from the Cookie header, if present and well-formed
fn cookie_session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}
