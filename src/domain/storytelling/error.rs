use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StorytellingServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    TooLarge(String),
    /// The model call failed or its reply could not be used
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for StorytellingServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => StorytellingServiceError::Invalid(msg),
            AppError::PayloadTooLarge(msg) => StorytellingServiceError::TooLarge(msg),
            _ => StorytellingServiceError::ModelUnavailable(err.to_string()),
        }
    }
}

impl From<StorytellingServiceError> for AppError {
    fn from(err: StorytellingServiceError) -> Self {
        match err {
            StorytellingServiceError::Invalid(msg) => AppError::BadRequest(msg),
            StorytellingServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            StorytellingServiceError::ModelUnavailable(_) => {
                AppError::ServiceUnavailable("Story generation unavailable".to_string())
            }
            StorytellingServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
