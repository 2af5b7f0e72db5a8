use super::dto::{
    group_translation_rows, CreateTranslationRequest, CreateWordRequest,
    CreatedTranslationResponse, WordContentOut,
};
use super::error::WordServiceError;
use super::language::{normalize_language, normalize_language_or, DEFAULT_LANGUAGE_FROM, DEFAULT_LANGUAGE_TO};
use super::model::{LanguagePair, Word, WordTranslation, WordTranslationRow};
use crate::infrastructure::repositories::WordRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const MAX_WORD_LENGTH: usize = 500;

pub struct WordService {
    word_repo: Arc<WordRepository>,
}

impl WordService {
    pub fn new(word_repo: Arc<WordRepository>) -> Self {
        Self { word_repo }
    }
}

#[async_trait]
pub trait WordServiceApi: Send + Sync {
    async fn list_words(
        &self,
        language_from: &str,
        language_to: &str,
    ) -> Result<Vec<WordContentOut>, WordServiceError>;

    async fn get_word_detail(&self, word_id: &str) -> Result<Vec<WordContentOut>, WordServiceError>;

    async fn create_word(&self, request: CreateWordRequest) -> Result<WordContentOut, WordServiceError>;

    async fn create_translation(
        &self,
        request: CreateTranslationRequest,
    ) -> Result<CreatedTranslationResponse, WordServiceError>;

    /// Pick a random translation row. `seed` must be positive.
    async fn random_word(
        &self,
        seed: i64,
        language_from: Option<String>,
        language_to: Option<String>,
    ) -> Result<Option<WordTranslationRow>, WordServiceError>;

    async fn list_language_pairs(&self) -> Result<Vec<LanguagePair>, WordServiceError>;
}

#[async_trait]
impl WordServiceApi for WordService {
    async fn list_words(
        &self,
        language_from: &str,
        language_to: &str,
    ) -> Result<Vec<WordContentOut>, WordServiceError> {
        let language_from = Self::language(language_from)?;
        let language_to = Self::language(language_to)?;

        let rows = self
            .word_repo
            .list_translations(&language_from, &language_to)
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))?;

        tracing::debug!(
            language_from = %language_from,
            language_to = %language_to,
            rows = rows.len(),
            "Loaded word translations"
        );

        Ok(group_translation_rows(rows))
    }

    async fn get_word_detail(&self, word_id: &str) -> Result<Vec<WordContentOut>, WordServiceError> {
        let word_id = Self::word_id(word_id)?;

        let rows = self
            .word_repo
            .find_translation_rows(word_id)
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))?;

        if rows.is_empty() {
            return Err(WordServiceError::NotFound(format!(
                "Word with id '{}' not found",
                word_id
            )));
        }

        Ok(group_translation_rows(rows))
    }

    async fn create_word(&self, request: CreateWordRequest) -> Result<WordContentOut, WordServiceError> {
        let word_content = request.word_content.trim();
        if word_content.is_empty() {
            return Err(WordServiceError::Invalid("Word content cannot be empty".to_string()));
        }
        if word_content.chars().count() > MAX_WORD_LENGTH {
            return Err(WordServiceError::Invalid(format!(
                "Word content must be {} characters or less",
                MAX_WORD_LENGTH
            )));
        }

        let word_language = Self::language(&request.word_language)?;

        let word_id = match request.word_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        if self
            .word_repo
            .find_by_id(&word_id)
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))?
            .is_some()
        {
            return Err(WordServiceError::Conflict("Word ID already exists".to_string()));
        }

        let word = Word {
            word_id,
            word_content: word_content.to_string(),
            word_language,
            valid: request.valid,
            note: request.note,
            tts_path: None,
        };

        self.word_repo.create(&word).await?;

        tracing::info!(
            word_id = %word.word_id,
            word_language = %word.word_language,
            "Word created"
        );

        Ok(WordContentOut::from(word))
    }

    async fn create_translation(
        &self,
        request: CreateTranslationRequest,
    ) -> Result<CreatedTranslationResponse, WordServiceError> {
        let word_id_from = Self::word_id(&request.word_id_from)?.to_string();
        let word_id_to = Self::word_id(&request.word_id_to)?.to_string();

        if word_id_from == word_id_to {
            return Err(WordServiceError::Invalid(
                "A word cannot be a translation of itself".to_string(),
            ));
        }

        for word_id in [&word_id_from, &word_id_to] {
            if self
                .word_repo
                .find_by_id(word_id)
                .await
                .map_err(|e| WordServiceError::Dependency(e.to_string()))?
                .is_none()
            {
                return Err(WordServiceError::NotFound(format!(
                    "Word with id '{}' not found",
                    word_id
                )));
            }
        }

        if self
            .word_repo
            .translation_exists_between(&word_id_from, &word_id_to)
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))?
        {
            return Err(WordServiceError::Conflict("Translation already exists".to_string()));
        }

        let translation = WordTranslation {
            word_translate_id: match request.word_translate_id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => Uuid::new_v4().to_string(),
            },
            word_id_from,
            word_id_to,
            valid: request.valid,
            note: request.note,
        };

        self.word_repo.create_translation(&translation).await?;

        tracing::info!(
            word_translate_id = %translation.word_translate_id,
            word_id_from = %translation.word_id_from,
            word_id_to = %translation.word_id_to,
            "Translation created"
        );

        Ok(CreatedTranslationResponse::from(translation))
    }

    async fn random_word(
        &self,
        seed: i64,
        language_from: Option<String>,
        language_to: Option<String>,
    ) -> Result<Option<WordTranslationRow>, WordServiceError> {
        if seed <= 0 {
            return Err(WordServiceError::NotFound(
                "Seed ID must be higher then 0".to_string(),
            ));
        }

        let language_from = normalize_language_or(language_from.as_deref(), DEFAULT_LANGUAGE_FROM)
            .ok_or_else(|| WordServiceError::Invalid("Invalid language tag".to_string()))?;
        let language_to = normalize_language_or(language_to.as_deref(), DEFAULT_LANGUAGE_TO)
            .ok_or_else(|| WordServiceError::Invalid("Invalid language tag".to_string()))?;

        self.word_repo
            .random_translation(&language_from, &language_to)
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))
    }

    async fn list_language_pairs(&self) -> Result<Vec<LanguagePair>, WordServiceError> {
        self.word_repo
            .list_language_pairs()
            .await
            .map_err(|e| WordServiceError::Dependency(e.to_string()))
    }
}

impl WordService {
    fn language(tag: &str) -> Result<String, WordServiceError> {
        normalize_language(tag)
            .ok_or_else(|| WordServiceError::Invalid(format!("Invalid language tag '{}'", tag)))
    }

    fn word_id(word_id: &str) -> Result<&str, WordServiceError> {
        let word_id = word_id.trim();
        if word_id.is_empty() {
            return Err(WordServiceError::Invalid("Word ID cannot be empty".to_string()));
        }
        Ok(word_id)
    }
}
