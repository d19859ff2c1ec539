//! Account CRUD and authentication operations.

use crate::{errors::*, types::*, validation};
use enroll_crypto::{generate_salt, hash_password, verify_password};
use enroll_storage::{
    traits::BatchExt, Storage, CF_ACCOUNTS, CF_ACCOUNTS_BY_EMAIL, CF_ACCOUNTS_BY_USERNAME,
};
use tracing::info;
use uuid::Uuid;

use super::DirectoryService;

impl<S> DirectoryService<S>
where
    S: Storage + 'static,
{
    /// Create a new account with its uniqueness index entries
    pub(crate) async fn register_internal(&self, request: NewAccount) -> Result<Account> {
        validation::validate_name(&request.name)?;
        validation::validate_username(&request.username)?;
        validation::validate_email(&request.email)?;
        validation::validate_password(&request.password)?;

        let username_key = request.username.to_lowercase();
        let email_key = request.email.to_lowercase();

        if self
            .storage
            .exists(CF_ACCOUNTS_BY_USERNAME, &username_key)
            .await?
        {
            return Err(DirectoryError::DuplicateIdentity { field: "username" });
        }

        if self.storage.exists(CF_ACCOUNTS_BY_EMAIL, &email_key).await? {
            return Err(DirectoryError::DuplicateIdentity { field: "email" });
        }

        let salt = generate_salt();
        let password_hash = hash_password(request.password.as_bytes(), &salt)?;

        let now = current_timestamp();
        let account = Account {
            account_id: Uuid::new_v4(),
            name: request.name,
            username: request.username,
            email: request.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        // Record and both index entries land atomically; a duplicate rejection
        // above leaves nothing behind.
        let mut batch = self.storage.batch();
        batch.put(CF_ACCOUNTS, &account.account_id, &account)?;
        batch.put(CF_ACCOUNTS_BY_USERNAME, &username_key, &account.account_id)?;
        batch.put(CF_ACCOUNTS_BY_EMAIL, &email_key, &account.account_id)?;
        batch.commit().await?;

        info!("Account registered: {}", account.account_id);
        Ok(account)
    }

    /// Authenticate by username and password
    pub(crate) async fn authenticate_internal(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account> {
        let username_key = username.to_lowercase();

        let account_id: Uuid = self
            .storage
            .get(CF_ACCOUNTS_BY_USERNAME, &username_key)
            .await?
            .ok_or(DirectoryError::AuthFailed)?;

        let account: Account = self
            .storage
            .get(CF_ACCOUNTS, &account_id)
            .await?
            .ok_or(DirectoryError::AuthFailed)?;

        verify_password(password.as_bytes(), &account.password_hash)
            .map_err(|_| DirectoryError::AuthFailed)?;

        info!("Authenticated account: {}", account.account_id);
        Ok(account)
    }

    /// Get an account by id
    pub(crate) async fn find_account_internal(&self, account_id: Uuid) -> Result<Account> {
        self.storage
            .get(CF_ACCOUNTS, &account_id)
            .await?
            .ok_or(DirectoryError::AccountNotFound(account_id))
    }

    /// Delete an account and its index entries
    pub(crate) async fn delete_account_internal(&self, account_id: Uuid) -> Result<()> {
        let account = self.find_account_internal(account_id).await?;

        let mut batch = self.storage.batch();
        batch.delete(CF_ACCOUNTS, &account_id)?;
        batch.delete(CF_ACCOUNTS_BY_USERNAME, &account.username.to_lowercase())?;
        batch.delete(CF_ACCOUNTS_BY_EMAIL, &account.email.to_lowercase())?;
        batch.commit().await?;

        info!("Account deleted: {}", account_id);
        Ok(())
    }
}
