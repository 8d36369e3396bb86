use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid profile: {}", .0.join(", "))]
    Invalid(Vec<String>),
    #[error("Invalid profile JSON format")]
    InvalidFormat,
    #[error("profile not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ProfileServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(errors) => ProfileServiceError::Invalid(errors),
            AppError::BadRequest(msg) => ProfileServiceError::Invalid(vec![msg]),
            AppError::NotFound(_) => ProfileServiceError::NotFound,
            AppError::Database(e) => ProfileServiceError::Storage(e),
            _ => ProfileServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ProfileServiceError> for AppError {
    fn from(err: ProfileServiceError) -> Self {
        match err {
            ProfileServiceError::Invalid(errors) => AppError::Validation(errors),
            ProfileServiceError::InvalidFormat => {
                AppError::Validation(vec!["Invalid profile JSON format".to_string()])
            }
            ProfileServiceError::NotFound => AppError::NotFound("Profile not found".to_string()),
            ProfileServiceError::Storage(e) => AppError::Database(e),
            ProfileServiceError::Dependency(msg) => AppError::Internal(msg),
            ProfileServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
