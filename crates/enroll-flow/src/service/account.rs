//! Gated profile operations: view, edit, delete.

use crate::{
    errors::Result,
    guard::require_confirmed,
    types::SessionId,
};
use enroll_directory::{
    Account, AccountUpdate, CredentialStore, Directory, Profile, ProfileDetails, ProfileStore,
};
use tracing::info;

use super::Enrollment;

impl<D: Directory> Enrollment<D> {
    /// Load the confirmed account and its profile for display
    pub async fn view(
        &self,
        session_id: SessionId,
        requested_path: &str,
    ) -> Result<(Account, Profile)> {
        let account_id = require_confirmed(&self.sessions, session_id, requested_path).await?;

        let account = self.directory.find_account(account_id).await?;
        let profile = self.directory.find_profile_by_owner(account_id).await?;

        Ok((account, profile))
    }

    /// Update account (name, email) and profile fields as one transaction
    ///
    /// An email collision fails the whole step; neither record changes and
    /// the session keeps pointing at the still-consistent account.
    pub async fn edit(
        &self,
        session_id: SessionId,
        requested_path: &str,
        update: AccountUpdate,
        details: ProfileDetails,
    ) -> Result<(Account, Profile)> {
        let account_id = require_confirmed(&self.sessions, session_id, requested_path).await?;

        let (account, profile) = self
            .directory
            .update_linked(account_id, update, details)
            .await?;

        info!("Edit applied for account {}", account_id);
        Ok((account, profile))
    }

    /// Delete the confirmed account and its profile, then clear the session
    ///
    /// The session must not keep pointing at a deleted account; both
    /// pointers are cleared before control returns.
    pub async fn delete_account(&self, session_id: SessionId, requested_path: &str) -> Result<()> {
        let account_id = require_confirmed(&self.sessions, session_id, requested_path).await?;

        self.directory.delete_linked(account_id).await?;
        self.sessions.clear_pointers(session_id).await?;

        info!("Account {} deleted via session {}", account_id, session_id);
        Ok(())
    }
}
