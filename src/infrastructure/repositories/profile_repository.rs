use crate::domain::profile::{
    CreatedProfile, ProfileListItem, ProfileRecord, ProfileRecordDraft, ProfileStore,
    UpdatedProfile,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// PostgreSQL-backed profile store.
///
/// Each call checks out one pooled connection; the guard hands it back to
/// the pool when it goes out of scope, whichever way the call returns.
pub struct ProfileRepository {
    pool: Arc<DbPool>,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    /// Insert a new profile row
    async fn create(&self, record: &ProfileRecordDraft) -> AppResult<CreatedProfile> {
        let mut conn = self.pool.acquire().await?;

        let created = sqlx::query_as::<_, CreatedProfile>(
            r#"
            INSERT INTO profiles (id, profile_name, profile_description, is_active, profile_json)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.profile_name)
        .bind(record.profile_description.as_deref().unwrap_or_default())
        .bind(record.is_active)
        .bind(&record.profile_json)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    /// Get a profile by ID
    async fn get(&self, id: Uuid) -> AppResult<Option<ProfileRecord>> {
        let mut conn = self.pool.acquire().await?;

        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, profile_name, profile_description, is_active, profile_json, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(record)
    }

    /// List every profile without its document
    async fn list_all(&self) -> AppResult<Vec<ProfileListItem>> {
        let mut conn = self.pool.acquire().await?;

        let items = sqlx::query_as::<_, ProfileListItem>(
            r#"
            SELECT id, profile_name, profile_description, is_active, created_at, updated_at
            FROM profiles
            ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(items)
    }

    /// Overwrite a profile row
    async fn update(&self, id: Uuid, record: &ProfileRecordDraft) -> AppResult<UpdatedProfile> {
        let mut conn = self.pool.acquire().await?;

        let updated = sqlx::query_as::<_, UpdatedProfile>(
            r#"
            UPDATE profiles
            SET profile_name = $1,
                profile_description = $2,
                is_active = $3,
                profile_json = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING id, updated_at
            "#,
        )
        .bind(&record.profile_name)
        .bind(record.profile_description.as_deref().unwrap_or_default())
        .bind(record.is_active)
        .bind(&record.profile_json)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        updated.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Delete a profile
    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
