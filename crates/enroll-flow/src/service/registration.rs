//! Registration and profile submission steps.

use crate::{
    errors::{FlowError, Result},
    types::SessionId,
};
use enroll_directory::{
    Account, CredentialStore, Directory, NewAccount, Profile, ProfileDetails, ProfileStore,
};
use tracing::info;

use super::Enrollment;

impl<D: Directory> Enrollment<D> {
    /// Create an account and point the session at it
    ///
    /// The store commit completes before the provisional pointer is set and
    /// before control returns to the caller. A duplicate username or email
    /// fails the whole step with nothing persisted and the session
    /// untouched.
    pub async fn register(&self, session_id: SessionId, request: NewAccount) -> Result<Account> {
        let account = self.directory.register(request).await?;

        self.sessions
            .set_provisional(session_id, account.account_id)
            .await?;

        info!(
            "Registration complete, awaiting profile: {}",
            account.account_id
        );
        Ok(account)
    }

    /// Create the profile for the account registered in this session
    ///
    /// Any creation failure is surfaced to the caller; this step never
    /// reports success it did not observe. The provisional pointer stays
    /// set on success so the session remains usable up to login.
    pub async fn submit_profile(
        &self,
        session_id: SessionId,
        details: ProfileDetails,
    ) -> Result<Profile> {
        let owner = self
            .sessions
            .provisional(session_id)
            .await?
            .ok_or(FlowError::NoProvisionalIdentity)?;

        let profile = self.directory.create_profile(owner, details).await?;

        info!("Profile linked to account {}", owner);
        Ok(profile)
    }
}
