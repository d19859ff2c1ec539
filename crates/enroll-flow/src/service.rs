//! Enrollment flow service implementation.

mod account;
mod login;
mod registration;

use crate::session::SessionManager;
use enroll_directory::Directory;
use std::sync::Arc;

/// Enrollment flow service
///
/// Orchestrates the registration → profile → login sequence and the gated
/// profile operations over a [`Directory`] and the per-session pointers.
pub struct Enrollment<D: Directory> {
    pub(crate) directory: Arc<D>,
    pub(crate) sessions: Arc<SessionManager>,
}

impl<D: Directory> Enrollment<D> {
    /// Create a new enrollment flow service
    pub fn new(directory: Arc<D>, sessions: Arc<SessionManager>) -> Self {
        Self {
            directory,
            sessions,
        }
    }

    /// The session manager this flow operates on
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }
}
