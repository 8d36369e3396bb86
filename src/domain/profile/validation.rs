//! Store-level checks run on the wire-level record right before a write.
//!
//! Overlaps with `Profile::validate_for_persistence`, since a record can
//! reach the store without passing through a `Profile` value.

use super::model::{ProfileRecordDraft, ValidationReport};

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

const REQUIRED_DOCUMENT_FIELDS: [&str; 2] = ["profile_name", "metadata"];

pub fn validate_for_database(record: &ProfileRecordDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if record.profile_name.trim().is_empty() {
        errors.push("Profile name is required".to_string());
    } else if record.profile_name.chars().count() > MAX_NAME_LENGTH {
        errors.push(format!(
            "Profile name must be {} characters or fewer",
            MAX_NAME_LENGTH
        ));
    }

    if let Some(description) = &record.profile_description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push(format!(
                "Profile description must be {} characters or fewer",
                MAX_DESCRIPTION_LENGTH
            ));
        }
    }

    if record.profile_json.is_null() {
        errors.push("Profile JSON is required".to_string());
    } else if let Some(document) = record.profile_json.as_object() {
        for field in REQUIRED_DOCUMENT_FIELDS {
            if !document.contains_key(field) {
                errors.push(format!(
                    "Profile JSON is missing required field: {}",
                    field
                ));
            }
        }
    } else {
        errors.push("Profile JSON must be an object".to_string());
    }

    ValidationReport::from_errors(errors)
}
