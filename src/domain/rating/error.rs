use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum RatingServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for RatingServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => RatingServiceError::Invalid(msg),
            AppError::NotFound(msg) => RatingServiceError::NotFound(msg),
            _ => RatingServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<RatingServiceError> for AppError {
    fn from(err: RatingServiceError) -> Self {
        match err {
            RatingServiceError::Invalid(msg) => AppError::BadRequest(msg),
            RatingServiceError::NotFound(msg) => AppError::NotFound(msg),
            RatingServiceError::Dependency(msg) => AppError::Internal(msg),
            RatingServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
