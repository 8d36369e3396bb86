use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::profile::dto::{
    DeleteProfileResponse, GetProfileResponse, ListProfilesResponse, ProfileIdQuery,
    SaveProfileResponse, UpdateProfileResponse,
};
use crate::{
    domain::profile::{ProfileRecordDraft, ProfileService},
    error::{AppError, AppResult},
    infrastructure::http::extract::{JsonBody, QueryParams},
};

pub struct ProfileController {
    profile_service: Arc<ProfileService>,
}

impl ProfileController {
    pub fn new(profile_service: Arc<ProfileService>) -> Self {
        Self { profile_service }
    }

    /// GET /api/save-profile - One profile when `id` is given, otherwise all of them
    pub async fn get_profiles(
        State(controller): State<Arc<ProfileController>>,
        QueryParams(query): QueryParams<ProfileIdQuery>,
    ) -> AppResult<Response> {
        let response = match query.id {
            Some(id) => {
                let profile = controller.profile_service.get_profile(id).await?;
                Json(GetProfileResponse {
                    success: true,
                    profile,
                })
                .into_response()
            }
            None => {
                let profiles = controller.profile_service.list_profiles().await?;
                Json(ListProfilesResponse {
                    success: true,
                    profiles,
                })
                .into_response()
            }
        };
        Ok(response)
    }

    /// POST /api/save-profile - Create a profile
    pub async fn save_profile(
        State(controller): State<Arc<ProfileController>>,
        JsonBody(draft): JsonBody<ProfileRecordDraft>,
    ) -> AppResult<(StatusCode, Json<SaveProfileResponse>)> {
        let created = controller.profile_service.save_profile(draft).await?;
        Ok((StatusCode::CREATED, Json(created.into())))
    }

    /// PUT /api/save-profile?id= - Overwrite a profile
    pub async fn update_profile(
        State(controller): State<Arc<ProfileController>>,
        QueryParams(query): QueryParams<ProfileIdQuery>,
        JsonBody(draft): JsonBody<ProfileRecordDraft>,
    ) -> AppResult<Json<UpdateProfileResponse>> {
        let id = require_id(&query)?;
        let updated = controller.profile_service.update_profile(id, draft).await?;
        Ok(Json(updated.into()))
    }

    /// DELETE /api/save-profile?id= - Delete a profile, reporting whether it existed
    pub async fn delete_profile(
        State(controller): State<Arc<ProfileController>>,
        QueryParams(query): QueryParams<ProfileIdQuery>,
    ) -> AppResult<Json<DeleteProfileResponse>> {
        let id = require_id(&query)?;
        let deleted = controller.profile_service.delete_profile(id).await?;
        Ok(Json(DeleteProfileResponse {
            success: true,
            deleted,
        }))
    }
}

fn require_id(query: &ProfileIdQuery) -> AppResult<Uuid> {
    query
        .id
        .ok_or_else(|| AppError::BadRequest("Profile id is required".to_string()))
}
