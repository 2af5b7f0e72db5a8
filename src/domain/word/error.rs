use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum WordServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for WordServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => WordServiceError::Invalid(msg),
            AppError::NotFound(msg) => WordServiceError::NotFound(msg),
            AppError::Conflict(msg) => WordServiceError::Conflict(msg),
            _ => WordServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<WordServiceError> for AppError {
    fn from(err: WordServiceError) -> Self {
        match err {
            WordServiceError::Invalid(msg) => AppError::BadRequest(msg),
            WordServiceError::NotFound(msg) => AppError::NotFound(msg),
            WordServiceError::Conflict(msg) => AppError::Conflict(msg),
            WordServiceError::Dependency(msg) => AppError::Internal(msg),
            WordServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
