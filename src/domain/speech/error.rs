use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("word not found")]
    WordNotFound,
    /// The synthesizer failed or returned nothing; no cache entry was written
    #[error("speech synthesis unavailable: {0}")]
    SynthesisUnavailable(String),
    #[error("audio storage error: {0}")]
    Storage(String),
    /// The word store failed
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<AppError> for SpeechServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SpeechServiceError::Invalid(msg),
            AppError::NotFound(_) => SpeechServiceError::WordNotFound,
            _ => SpeechServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::WordNotFound => AppError::NotFound("Word not found".to_string()),
            SpeechServiceError::SynthesisUnavailable(_) => {
                AppError::ServiceUnavailable("Audio temporarily unavailable".to_string())
            }
            SpeechServiceError::Storage(msg) => AppError::ExternalService(msg),
            SpeechServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
