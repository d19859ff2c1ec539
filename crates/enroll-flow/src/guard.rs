//! Access guard over gated operations.

use crate::{
    errors::{FlowError, Result},
    session::SessionManager,
    types::{SessionContext, SessionId},
};
use tracing::debug;
use uuid::Uuid;

/// Login state as seen by the guard
///
/// `Provisional` means an account registered in this session but no login
/// has resolved a profile yet; gated operations treat it like `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Anonymous,
    Provisional(Uuid),
    Confirmed(Uuid),
}

impl AccessState {
    /// Derive the state from a session context
    pub fn of(ctx: &SessionContext) -> Self {
        match (ctx.confirmed, ctx.provisional) {
            (Some(account_id), _) => AccessState::Confirmed(account_id),
            (None, Some(account_id)) => AccessState::Provisional(account_id),
            (None, None) => AccessState::Anonymous,
        }
    }
}

/// Gate a profile view/edit/delete operation
///
/// Returns the confirmed account id, or records the requested path for a
/// post-login redirect and fails with `NotLoggedIn`.
pub async fn require_confirmed(
    sessions: &SessionManager,
    session_id: SessionId,
    requested_path: &str,
) -> Result<Uuid> {
    let ctx = sessions.context(session_id).await?;

    match AccessState::of(&ctx) {
        AccessState::Confirmed(account_id) => Ok(account_id),
        state => {
            debug!(?state, path = requested_path, "Gated operation rejected");
            sessions
                .remember_return_to(session_id, requested_path)
                .await?;
            Err(FlowError::NotLoggedIn)
        }
    }
}
