use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{CreatedProfile, ProfileListItem, ProfileRecord, UpdatedProfile};

/// Query string of the save-profile endpoint
#[derive(Debug, Deserialize)]
pub struct ProfileIdQuery {
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Response for POST /api/save-profile
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl From<CreatedProfile> for SaveProfileResponse {
    fn from(created: CreatedProfile) -> Self {
        Self {
            success: true,
            id: created.id,
            created_at: created.created_at,
            message: "Profile saved successfully".to_string(),
        }
    }
}

/// Response for PUT /api/save-profile?id=
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub message: String,
}

impl From<UpdatedProfile> for UpdateProfileResponse {
    fn from(updated: UpdatedProfile) -> Self {
        Self {
            success: true,
            id: updated.id,
            updated_at: updated.updated_at,
            message: "Profile updated successfully".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub success: bool,
    pub profile: ProfileRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListProfilesResponse {
    pub success: bool,
    pub profiles: Vec<ProfileListItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteProfileResponse {
    pub success: bool,
    pub deleted: bool,
}
