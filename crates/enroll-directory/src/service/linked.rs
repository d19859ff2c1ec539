//! Linked account+profile transactions.
//!
//! The edit and delete steps treat the account and its profile as one
//! logical record: both records are validated up front and the writes go
//! through a single batch, so a rejected email change touches neither.

use crate::{errors::*, types::*, validation};
use enroll_storage::{
    traits::BatchExt, Storage, CF_ACCOUNTS, CF_ACCOUNTS_BY_EMAIL, CF_ACCOUNTS_BY_USERNAME,
    CF_PROFILES, CF_PROFILES_BY_OWNER,
};
use tracing::info;
use uuid::Uuid;

use super::DirectoryService;

impl<S> DirectoryService<S>
where
    S: Storage + 'static,
{
    /// Update account (name, email) and profile fields in one batch
    pub(crate) async fn update_linked_internal(
        &self,
        account_id: Uuid,
        update: AccountUpdate,
        details: ProfileDetails,
    ) -> Result<(Account, Profile)> {
        validation::validate_name(&update.name)?;
        validation::validate_email(&update.email)?;

        // Both target records must exist before anything is written
        let mut account = self.find_account_internal(account_id).await?;
        let mut profile = self.find_profile_by_owner_internal(account_id).await?;

        let old_email_key = account.email.to_lowercase();
        let new_email_key = update.email.to_lowercase();

        if new_email_key != old_email_key {
            let holder: Option<Uuid> = self
                .storage
                .get(CF_ACCOUNTS_BY_EMAIL, &new_email_key)
                .await?;
            if holder.is_some_and(|id| id != account_id) {
                return Err(DirectoryError::DuplicateIdentity { field: "email" });
            }
        }

        let now = current_timestamp();
        account.name = update.name;
        account.email = update.email;
        account.updated_at = now;
        profile.apply(details, now);

        let mut batch = self.storage.batch();
        if new_email_key != old_email_key {
            batch.delete(CF_ACCOUNTS_BY_EMAIL, &old_email_key)?;
            batch.put(CF_ACCOUNTS_BY_EMAIL, &new_email_key, &account_id)?;
        }
        batch.put(CF_ACCOUNTS, &account_id, &account)?;
        batch.put(CF_PROFILES, &profile.profile_id, &profile)?;
        batch.commit().await?;

        info!("Account and profile updated: {}", account_id);
        Ok((account, profile))
    }

    /// Delete the profile and its owning account in one batch
    pub(crate) async fn delete_linked_internal(&self, account_id: Uuid) -> Result<()> {
        let account = self.find_account_internal(account_id).await?;
        let profile_id: Option<Uuid> = self.storage.get(CF_PROFILES_BY_OWNER, &account_id).await?;

        let mut batch = self.storage.batch();
        if let Some(profile_id) = profile_id {
            batch.delete(CF_PROFILES, &profile_id)?;
            batch.delete(CF_PROFILES_BY_OWNER, &account_id)?;
        }
        batch.delete(CF_ACCOUNTS, &account_id)?;
        batch.delete(CF_ACCOUNTS_BY_USERNAME, &account.username.to_lowercase())?;
        batch.delete(CF_ACCOUNTS_BY_EMAIL, &account.email.to_lowercase())?;
        batch.commit().await?;

        info!("Account and profile deleted: {}", account_id);
        Ok(())
    }
}
