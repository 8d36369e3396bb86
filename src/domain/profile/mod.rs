pub mod dto;
pub mod error;
pub mod manager;
pub mod model;
pub mod service;
pub mod validation;

pub use error::ProfileServiceError;
pub use manager::ProfileFormInput;
pub use model::{
    CategoryTags, CreatedProfile, FeedStatus, Profile, ProfileListItem, ProfileRecord,
    ProfileRecordDraft, ProfileSummary, RssFeed, UpdatedProfile, ValidationReport,
};
pub use service::ProfileService;
pub use validation::validate_for_database;

use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable storage for profile records
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create(&self, record: &ProfileRecordDraft) -> AppResult<CreatedProfile>;

    async fn get(&self, id: Uuid) -> AppResult<Option<ProfileRecord>>;

    /// Most recently updated first
    async fn list_all(&self) -> AppResult<Vec<ProfileListItem>>;

    /// Fails with `AppError::NotFound` when no row has this id
    async fn update(&self, id: Uuid, record: &ProfileRecordDraft) -> AppResult<UpdatedProfile>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
