//! Directory trait definitions.

use crate::{errors::Result, types::*};
use async_trait::async_trait;
use uuid::Uuid;

/// Credential store: account identity plus hashed secret
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Create a new account
    ///
    /// Uniqueness of username and email is enforced here, atomically with
    /// the record write; callers must not pre-check.
    async fn register(&self, request: NewAccount) -> Result<Account>;

    /// Authenticate by username and password
    ///
    /// Unknown usernames and wrong passwords both fail with `AuthFailed`.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Account>;

    /// Get an account by id
    async fn find_account(&self, account_id: Uuid) -> Result<Account>;

    /// Delete an account and its uniqueness index entries
    async fn delete_account(&self, account_id: Uuid) -> Result<()>;
}

/// Profile store: one supplementary record per account
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create the profile for an account
    ///
    /// Fails with `ProfileAlreadyExists` if the account already has one.
    async fn create_profile(&self, owner: Uuid, details: ProfileDetails) -> Result<Profile>;

    /// Look up the profile owned by an account
    async fn find_profile_by_owner(&self, owner: Uuid) -> Result<Profile>;

    /// Overwrite the profile's form fields
    async fn update_profile(&self, profile_id: Uuid, details: ProfileDetails) -> Result<Profile>;

    /// Delete a profile and its owner index entry
    async fn delete_profile(&self, profile_id: Uuid) -> Result<()>;
}

/// Combined store with the linked account+profile transactions
///
/// The edit and delete steps treat the pair as one logical record: both
/// writes land in a single storage batch or neither does.
#[async_trait]
pub trait Directory: CredentialStore + ProfileStore {
    /// Update account (name, email) and profile fields together
    ///
    /// Both records are loaded and the email uniqueness check passes before
    /// anything is written.
    async fn update_linked(
        &self,
        account_id: Uuid,
        update: AccountUpdate,
        details: ProfileDetails,
    ) -> Result<(Account, Profile)>;

    /// Delete the profile and its owning account together
    async fn delete_linked(&self, account_id: Uuid) -> Result<()>;
}
