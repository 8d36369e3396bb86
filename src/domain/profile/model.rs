use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

pub const PROFILE_VERSION: &str = "1.0";
pub const DEFAULT_SUMMARY_LENGTH: i64 = 150;

/// Profile document as carried in `profile_json`.
///
/// Field names on the wire are kept stable because stored documents and the
/// record validator both key on them (`profile_name`, `metadata`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profile_name")]
    pub name: String,
    #[serde(rename = "profile_description")]
    pub description: String,
    #[serde(rename = "tone_of_voice")]
    pub tone: String,
    #[serde(rename = "evaluationCriteria")]
    pub evaluation_criteria: Vec<String>,
    #[serde(rename = "summaryLength")]
    pub summary_length: i64,
    #[serde(rename = "categoryTags")]
    pub category_tags: CategoryTags,
    #[serde(rename = "rssFeeds")]
    pub rss_feeds: Vec<RssFeed>,
    pub metadata: ProfileMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Active,
    #[default]
    Paused,
}

/// RSS source attached to a profile. `selected` is UI state only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssFeed {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: FeedStatus,
    #[serde(default)]
    pub selected: bool,
}

impl RssFeed {
    pub fn is_active(&self) -> bool {
        self.status == FeedStatus::Active
    }

    pub fn unselected(self) -> Self {
        Self {
            selected: false,
            ..self
        }
    }
}

/// Fixed set of topic flags a profile can opt into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryTags {
    pub in_the_news: bool,
    pub trans_health: bool,
    pub gender_sense_latest: bool,
    pub transition_coaching: bool,
    pub community_highlights: bool,
    pub trans_rights: bool,
}

impl CategoryTags {
    fn flag_mut(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "inTheNews" => Some(&mut self.in_the_news),
            "transHealth" => Some(&mut self.trans_health),
            "genderSenseLatest" => Some(&mut self.gender_sense_latest),
            "transitionCoaching" => Some(&mut self.transition_coaching),
            "communityHighlights" => Some(&mut self.community_highlights),
            "transRights" => Some(&mut self.trans_rights),
            _ => None,
        }
    }

    fn flags(&self) -> [bool; 6] {
        [
            self.in_the_news,
            self.trans_health,
            self.gender_sense_latest,
            self.transition_coaching,
            self.community_highlights,
            self.trans_rights,
        ]
    }

    pub fn selected_count(&self) -> usize {
        self.flags().iter().filter(|flag| **flag).count()
    }

    /// Overlay boolean entries of `overrides` onto these tags. Unknown keys
    /// and non-boolean values are ignored, missing keys keep their value.
    pub fn merged_with(mut self, overrides: &serde_json::Map<String, JsonValue>) -> Self {
        for (key, value) in overrides {
            if let (Some(flag), Some(value)) = (self.flag_mut(key), value.as_bool()) {
                *flag = value;
            }
        }
        self
    }
}

/// Derived read-only view over a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub criteria_count: usize,
    pub active_feeds_count: usize,
    pub selected_categories_count: usize,
    pub is_complete: bool,
}

/// Outcome of a validation pass. Every violation is collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn default_is_active() -> bool {
    true
}

/// Wire-level record submitted for writing.
///
/// A missing name or document still decodes; `validate_for_database`
/// reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecordDraft {
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub profile_description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub profile_json: JsonValue,
}

/// Row of the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub profile_name: String,
    pub profile_description: String,
    pub is_active: bool,
    pub profile_json: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `profiles` table without the nested document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileListItem {
    pub id: Uuid,
    pub profile_name: String,
    pub profile_description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CreatedProfile {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UpdatedProfile {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
}
