//! Profile CRUD operations.

use crate::{errors::*, types::*};
use enroll_storage::{traits::BatchExt, Storage, CF_PROFILES, CF_PROFILES_BY_OWNER};
use tracing::info;
use uuid::Uuid;

use super::DirectoryService;

impl<S> DirectoryService<S>
where
    S: Storage + 'static,
{
    /// Create the one profile for an account
    pub(crate) async fn create_profile_internal(
        &self,
        owner: Uuid,
        details: ProfileDetails,
    ) -> Result<Profile> {
        // Owner must exist before a profile can reference it
        self.find_account_internal(owner).await?;

        if self.storage.exists(CF_PROFILES_BY_OWNER, &owner).await? {
            return Err(DirectoryError::ProfileAlreadyExists(owner));
        }

        let now = current_timestamp();
        let profile = Profile {
            profile_id: Uuid::new_v4(),
            owner,
            student_id: details.student_id,
            date_of_birth: details.date_of_birth,
            gender: details.gender,
            year: details.year,
            branch: details.branch,
            college: details.college,
            address: details.address,
            contact: details.contact,
            created_at: now,
            updated_at: now,
        };

        let mut batch = self.storage.batch();
        batch.put(CF_PROFILES, &profile.profile_id, &profile)?;
        batch.put(CF_PROFILES_BY_OWNER, &owner, &profile.profile_id)?;
        batch.commit().await?;

        info!("Profile created for account {}", owner);
        Ok(profile)
    }

    /// Look up the profile owned by an account
    pub(crate) async fn find_profile_by_owner_internal(&self, owner: Uuid) -> Result<Profile> {
        let profile_id: Uuid = self
            .storage
            .get(CF_PROFILES_BY_OWNER, &owner)
            .await?
            .ok_or(DirectoryError::ProfileNotFound(owner))?;

        self.storage
            .get(CF_PROFILES, &profile_id)
            .await?
            .ok_or(DirectoryError::ProfileNotFound(owner))
    }

    /// Overwrite the profile's form fields
    pub(crate) async fn update_profile_internal(
        &self,
        profile_id: Uuid,
        details: ProfileDetails,
    ) -> Result<Profile> {
        let mut profile: Profile = self
            .storage
            .get(CF_PROFILES, &profile_id)
            .await?
            .ok_or(DirectoryError::ProfileNotFound(profile_id))?;

        profile.apply(details, current_timestamp());

        self.storage
            .put(CF_PROFILES, &profile_id, &profile)
            .await?;

        info!("Profile updated: {}", profile_id);
        Ok(profile)
    }

    /// Delete a profile and its owner index entry
    pub(crate) async fn delete_profile_internal(&self, profile_id: Uuid) -> Result<()> {
        let profile: Profile = self
            .storage
            .get(CF_PROFILES, &profile_id)
            .await?
            .ok_or(DirectoryError::ProfileNotFound(profile_id))?;

        let mut batch = self.storage.batch();
        batch.delete(CF_PROFILES, &profile_id)?;
        batch.delete(CF_PROFILES_BY_OWNER, &profile.owner)?;
        batch.commit().await?;

        info!("Profile deleted: {}", profile_id);
        Ok(())
    }
}
