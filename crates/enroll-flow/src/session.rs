//! In-process session management.
//!
//! Session contexts are process-held, keyed by the id in the session
//! cookie, and exclusively owned by their session. Nothing here is
//! persisted; a restart logs everyone out.

use crate::{
    errors::{FlowError, Result},
    types::{current_timestamp, Notice, SessionContext, SessionId},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Session manager holding all live session contexts
#[derive(Default)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<SessionId, SessionContext>>>,
}

impl SessionManager {
    /// Create an empty session manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session and return its id
    pub async fn open(&self) -> SessionId {
        let session_id = SessionId(Uuid::new_v4());

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, SessionContext::new(session_id, current_timestamp()));

        debug!("Session opened: {}", session_id);
        session_id
    }

    /// Whether a session id maps to a live session
    pub async fn exists(&self, session_id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&session_id)
    }

    /// Snapshot of a session context
    pub async fn context(&self, session_id: SessionId) -> Result<SessionContext> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(FlowError::SessionNotFound(session_id.0))
    }

    /// Set the provisional pointer (account just registered, profile pending)
    pub async fn set_provisional(&self, session_id: SessionId, account_id: Uuid) -> Result<()> {
        self.with(session_id, |ctx| ctx.provisional = Some(account_id))
            .await
    }

    /// Read the provisional pointer
    pub async fn provisional(&self, session_id: SessionId) -> Result<Option<Uuid>> {
        self.with(session_id, |ctx| ctx.provisional).await
    }

    /// Set the confirmed pointer (login resolved a profile)
    pub async fn set_confirmed(&self, session_id: SessionId, account_id: Uuid) -> Result<()> {
        self.with(session_id, |ctx| ctx.confirmed = Some(account_id))
            .await
    }

    /// Read the confirmed pointer
    pub async fn confirmed(&self, session_id: SessionId) -> Result<Option<Uuid>> {
        self.with(session_id, |ctx| ctx.confirmed).await
    }

    /// Remember the path a rejected gated request asked for
    pub async fn remember_return_to(&self, session_id: SessionId, path: &str) -> Result<()> {
        let path = path.to_string();
        self.with(session_id, |ctx| ctx.return_to = Some(path)).await
    }

    /// Take (and clear) the remembered post-login path
    pub async fn take_return_to(&self, session_id: SessionId) -> Result<Option<String>> {
        self.with(session_id, |ctx| ctx.return_to.take()).await
    }

    /// Park a one-shot notice for the next render
    pub async fn set_notice(&self, session_id: SessionId, notice: Notice) -> Result<()> {
        self.with(session_id, |ctx| ctx.notice = Some(notice)).await
    }

    /// Take (and clear) the parked notice
    pub async fn take_notice(&self, session_id: SessionId) -> Result<Option<Notice>> {
        self.with(session_id, |ctx| ctx.notice.take()).await
    }

    /// Clear both identity pointers, leaving the session itself alive
    pub async fn clear_pointers(&self, session_id: SessionId) -> Result<()> {
        self.with(session_id, |ctx| {
            ctx.provisional = None;
            ctx.confirmed = None;
        })
        .await
    }

    /// Drop the session entirely
    pub async fn end(&self, session_id: SessionId) {
        self.sessions.write().await.remove(&session_id);
        debug!("Session ended: {}", session_id);
    }

    async fn with<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut SessionContext) -> T + Send,
    ) -> Result<T> {
        let mut sessions = self.sessions.write().await;
        let ctx = sessions
            .get_mut(&session_id)
            .ok_or(FlowError::SessionNotFound(session_id.0))?;
        Ok(f(ctx))
    }
}
