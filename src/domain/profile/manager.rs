//! Value transformations over [`Profile`].
//!
//! Every operation takes the current profile by reference and returns a new
//! value, so validation, export and summaries are pure functions of it.

use super::error::ProfileServiceError;
use super::model::{
    CategoryTags, Profile, ProfileMetadata, ProfileRecordDraft, ProfileSummary, RssFeed,
    ValidationReport, DEFAULT_SUMMARY_LENGTH, PROFILE_VERSION,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Form submission used to rebuild every mutable field of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFormInput {
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub profile_description: String,
    #[serde(default)]
    pub tone_of_voice: String,
    #[serde(default)]
    pub criterion1: String,
    #[serde(default)]
    pub criterion2: String,
    #[serde(default)]
    pub criterion3: String,
    #[serde(rename = "stepValue", default = "default_summary_length")]
    pub step_value: i64,
    #[serde(rename = "categoryTags", default)]
    pub category_tags: CategoryTags,
    #[serde(rename = "rssFeeds", default)]
    pub rss_feeds: Vec<RssFeed>,
}

const MAX_EVALUATION_CRITERIA: usize = 3;

fn default_summary_length() -> i64 {
    DEFAULT_SUMMARY_LENGTH
}

impl Profile {
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            description: String::new(),
            tone: String::new(),
            evaluation_criteria: Vec::new(),
            summary_length: DEFAULT_SUMMARY_LENGTH,
            category_tags: CategoryTags::default(),
            rss_feeds: Vec::new(),
            metadata: ProfileMetadata {
                created_at: now,
                updated_at: now,
                version: PROFILE_VERSION.to_string(),
            },
        }
    }

    /// Replace all mutable fields from a form submission.
    ///
    /// Category tags are replaced wholesale here, unlike `load_from_json`.
    pub fn apply_form(&self, input: ProfileFormInput) -> Self {
        let evaluation_criteria = [input.criterion1, input.criterion2, input.criterion3]
            .into_iter()
            .filter(|criterion| !criterion.trim().is_empty())
            .collect();

        Self {
            name: input.profile_name,
            description: input.profile_description,
            tone: input.tone_of_voice,
            evaluation_criteria,
            summary_length: input.step_value,
            category_tags: input.category_tags,
            rss_feeds: input.rss_feeds.into_iter().map(RssFeed::unselected).collect(),
            metadata: self.touched_metadata(),
        }
    }

    pub fn validate_for_persistence(&self) -> ValidationReport {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Profile name is required".to_string());
        }
        if self.tone.is_empty() {
            errors.push("Tone of voice must be selected".to_string());
        }
        if self.evaluation_criteria.is_empty() {
            errors.push("At least one evaluation criteria must be selected".to_string());
        }
        if self.active_feeds_count() == 0 {
            errors.push("At least one RSS feed must be active".to_string());
        }
        if self.category_tags.selected_count() == 0 {
            errors.push("At least one category tag must be selected".to_string());
        }

        ValidationReport::from_errors(errors)
    }

    pub fn to_stored_record(&self) -> Result<ProfileRecordDraft, ProfileServiceError> {
        let profile_json = serde_json::to_value(self)
            .map_err(|e| ProfileServiceError::Other(e.into()))?;

        Ok(ProfileRecordDraft {
            profile_name: self.name.clone(),
            profile_description: Some(self.description.clone()),
            is_active: true,
            profile_json,
        })
    }

    /// Merge an untyped document onto this profile.
    ///
    /// Fields that are absent or of the wrong shape fall back to defaults;
    /// only a non-object document is rejected.
    pub fn load_from_json(&self, document: &JsonValue) -> Result<Self, ProfileServiceError> {
        let fields = document
            .as_object()
            .ok_or(ProfileServiceError::InvalidFormat)?;

        let text = |key: &str| {
            fields
                .get(key)
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let summary_length = fields
            .get("summaryLength")
            .and_then(JsonValue::as_i64)
            .filter(|length| *length != 0)
            .unwrap_or(DEFAULT_SUMMARY_LENGTH);

        let evaluation_criteria = fields
            .get("evaluationCriteria")
            .and_then(JsonValue::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(JsonValue::as_str)
                    .filter(|criterion| !criterion.trim().is_empty())
                    .take(MAX_EVALUATION_CRITERIA)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let category_tags = match fields.get("categoryTags").and_then(JsonValue::as_object) {
            Some(overrides) => self.category_tags.merged_with(overrides),
            None => self.category_tags,
        };

        let rss_feeds = fields
            .get("rssFeeds")
            .and_then(JsonValue::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| match serde_json::from_value::<RssFeed>(entry.clone()) {
                        Ok(feed) => Some(feed.unselected()),
                        Err(e) => {
                            tracing::debug!(error = %e, "Dropping undecodable feed entry");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let created_at = fields
            .get("metadata")
            .and_then(|metadata| metadata.get("createdAt"))
            .and_then(JsonValue::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or(self.metadata.created_at);

        Ok(Self {
            name: text("profile_name"),
            description: text("profile_description"),
            tone: text("tone_of_voice"),
            evaluation_criteria,
            summary_length,
            category_tags,
            rss_feeds,
            metadata: ProfileMetadata {
                created_at,
                updated_at: Utc::now(),
                version: PROFILE_VERSION.to_string(),
            },
        })
    }

    pub fn export_json(&self) -> Result<String, ProfileServiceError> {
        serde_json::to_string_pretty(self).map_err(|e| ProfileServiceError::Other(e.into()))
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            name: self.name.clone(),
            criteria_count: self.evaluation_criteria.len(),
            active_feeds_count: self.active_feeds_count(),
            selected_categories_count: self.category_tags.selected_count(),
            is_complete: self.validate_for_persistence().is_valid,
        }
    }

    pub fn active_feeds_count(&self) -> usize {
        self.rss_feeds.iter().filter(|feed| feed.is_active()).count()
    }

    fn touched_metadata(&self) -> ProfileMetadata {
        ProfileMetadata {
            updated_at: Utc::now(),
            ..self.metadata.clone()
        }
    }
}
