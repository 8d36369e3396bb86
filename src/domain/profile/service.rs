use super::error::ProfileServiceError;
use super::model::{
    CreatedProfile, Profile, ProfileListItem, ProfileRecord, ProfileRecordDraft, UpdatedProfile,
};
use super::validation::validate_for_database;
use super::ProfileStore;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn save_profile(
        &self,
        draft: ProfileRecordDraft,
    ) -> Result<CreatedProfile, ProfileServiceError> {
        let record = self.prepare_record(draft)?;
        let created = self.store.create(&record).await?;

        tracing::info!(
            profile_id = %created.id,
            profile_name = %record.profile_name,
            "Profile saved"
        );

        Ok(created)
    }

    pub async fn get_profile(&self, id: Uuid) -> Result<ProfileRecord, ProfileServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or(ProfileServiceError::NotFound)
    }

    pub async fn list_profiles(&self) -> Result<Vec<ProfileListItem>, ProfileServiceError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        draft: ProfileRecordDraft,
    ) -> Result<UpdatedProfile, ProfileServiceError> {
        let record = self.prepare_record(draft)?;
        let updated = self.store.update(id, &record).await?;

        tracing::info!(profile_id = %id, "Profile updated");

        Ok(updated)
    }

    /// Returns false when there was nothing to delete
    pub async fn delete_profile(&self, id: Uuid) -> Result<bool, ProfileServiceError> {
        let deleted = self.store.delete(id).await?;

        tracing::info!(profile_id = %id, deleted, "Profile delete requested");

        Ok(deleted)
    }
}

impl ProfileService {
    /// Run both validators and swap in the normalized document.
    ///
    /// All messages are returned together; the store-level ones come first
    /// and repeats from the profile check are dropped.
    fn prepare_record(
        &self,
        mut draft: ProfileRecordDraft,
    ) -> Result<ProfileRecordDraft, ProfileServiceError> {
        let mut errors = validate_for_database(&draft).errors;

        let normalized = if draft.profile_json.is_object() {
            let profile = Profile::empty().load_from_json(&draft.profile_json)?;
            for error in profile.validate_for_persistence().errors {
                if !errors.contains(&error) {
                    errors.push(error);
                }
            }
            Some(profile)
        } else {
            None
        };

        if !errors.is_empty() {
            tracing::info!(
                error_count = errors.len(),
                errors = ?errors,
                "Rejected invalid profile record"
            );
            return Err(ProfileServiceError::Invalid(errors));
        }

        if let Some(profile) = normalized {
            draft.profile_json = serde_json::to_value(&profile)
                .map_err(|e| ProfileServiceError::Other(e.into()))?;
        }

        Ok(draft)
    }
}
