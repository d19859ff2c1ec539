//! Login, reconciliation and logout steps.

use crate::{
    errors::{FlowError, Result},
    types::{Credentials, LoginSuccess, SessionId},
};
use enroll_directory::{CredentialStore, Directory, DirectoryError, ProfileStore};
use tracing::{info, warn};

use super::Enrollment;

impl<D: Directory> Enrollment<D> {
    /// Authenticate and resolve the linked profile
    ///
    /// Authentication must succeed before the profile lookup runs. An
    /// authenticated account with no profile is an abandoned registration:
    /// the orphaned account is deleted outright (it is unusable — every
    /// gated view depends on the profile) and the caller is sent back to
    /// registration. Bad credentials modify nothing.
    pub async fn login(&self, session_id: SessionId, credentials: Credentials) -> Result<LoginSuccess> {
        let account = self
            .directory
            .authenticate(&credentials.username, &credentials.password)
            .await?;

        match self.directory.find_profile_by_owner(account.account_id).await {
            Ok(profile) => {
                self.sessions
                    .set_confirmed(session_id, account.account_id)
                    .await?;
                let return_to = self.sessions.take_return_to(session_id).await?;

                info!("Login confirmed for account {}", account.account_id);
                Ok(LoginSuccess {
                    account,
                    profile,
                    return_to,
                })
            }
            Err(DirectoryError::ProfileNotFound(_)) => {
                warn!(
                    "Account {} has no profile; deleting orphaned account",
                    account.account_id
                );
                self.directory.delete_account(account.account_id).await?;
                self.sessions.clear_pointers(session_id).await?;
                Err(FlowError::ProfileMissing)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Clear both identity pointers; Confirmed → Anonymous
    pub async fn logout(&self, session_id: SessionId) -> Result<()> {
        self.sessions.clear_pointers(session_id).await?;
        info!("Session logged out: {}", session_id);
        Ok(())
    }
}
