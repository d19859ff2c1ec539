//! Directory service implementation.

mod accounts;
mod linked;
mod profiles;

use crate::{errors::Result, traits::*, types::*};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use enroll_storage::Storage;

/// Directory service implementation
///
/// Owns all reads and writes of account and profile records. Every
/// multi-record mutation goes through a single storage batch.
pub struct DirectoryService<S: Storage> {
    pub(crate) storage: Arc<S>,
}

impl<S: Storage> DirectoryService<S> {
    /// Create a new directory service
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> CredentialStore for DirectoryService<S>
where
    S: Storage + 'static,
{
    async fn register(&self, request: NewAccount) -> Result<Account> {
        self.register_internal(request).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Account> {
        self.authenticate_internal(username, password).await
    }

    async fn find_account(&self, account_id: Uuid) -> Result<Account> {
        self.find_account_internal(account_id).await
    }

    async fn delete_account(&self, account_id: Uuid) -> Result<()> {
        self.delete_account_internal(account_id).await
    }
}

#[async_trait]
impl<S> ProfileStore for DirectoryService<S>
where
    S: Storage + 'static,
{
    async fn create_profile(&self, owner: Uuid, details: ProfileDetails) -> Result<Profile> {
        self.create_profile_internal(owner, details).await
    }

    async fn find_profile_by_owner(&self, owner: Uuid) -> Result<Profile> {
        self.find_profile_by_owner_internal(owner).await
    }

    async fn update_profile(&self, profile_id: Uuid, details: ProfileDetails) -> Result<Profile> {
        self.update_profile_internal(profile_id, details).await
    }

    async fn delete_profile(&self, profile_id: Uuid) -> Result<()> {
        self.delete_profile_internal(profile_id).await
    }
}

#[async_trait]
impl<S> Directory for DirectoryService<S>
where
    S: Storage + 'static,
{
    async fn update_linked(
        &self,
        account_id: Uuid,
        update: AccountUpdate,
        details: ProfileDetails,
    ) -> Result<(Account, Profile)> {
        self.update_linked_internal(account_id, update, details)
            .await
    }

    async fn delete_linked(&self, account_id: Uuid) -> Result<()> {
        self.delete_linked_internal(account_id).await
    }
}
