use super::word_speech_repository::{WordSpeechEntry, WordSpeechRepository};
use crate::domain::word::{LanguagePair, Word, WordTranslation, WordTranslationRow};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

const TRANSLATION_COLUMNS: &str = r#"
    word_id_from, word_content_from, word_language_from, valid_from, note_from,
    word_translate_id, word_id_to, word_content_to, word_language_to, valid_to, note_to,
    success_rate
"#;

pub struct WordRepository {
    pool: Arc<DbPool>,
}

impl WordRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get a word by ID
    pub async fn find_by_id(&self, word_id: &str) -> AppResult<Option<Word>> {
        let pool = self.pool.as_ref();
        let word = sqlx::query_as::<_, Word>(
            r#"
            SELECT word_id, word_content, word_language, valid, note, tts_path
            FROM word_content
            WHERE word_id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(pool)
        .await?;

        Ok(word)
    }

    /// Insert a new word
    pub async fn create(&self, word: &Word) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO word_content (word_id, word_content, word_language, valid, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&word.word_id)
        .bind(&word.word_content)
        .bind(&word.word_language)
        .bind(word.valid)
        .bind(&word.note)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Word ID already exists".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// All valid source words of one language with their translations into another
    pub async fn list_translations(
        &self,
        language_from: &str,
        language_to: &str,
    ) -> AppResult<Vec<WordTranslationRow>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, WordTranslationRow>(&format!(
            r#"
            SELECT {TRANSLATION_COLUMNS}
            FROM words_all_with_translate
            WHERE word_language_from = $1
              AND valid_from = TRUE
              AND word_language_to = $2
            ORDER BY word_id_from, word_translate_id, word_id_to
            "#
        ))
        .bind(language_from)
        .bind(language_to)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Every view row for one source word, including the row without a target
    pub async fn find_translation_rows(&self, word_id: &str) -> AppResult<Vec<WordTranslationRow>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, WordTranslationRow>(&format!(
            r#"
            SELECT {TRANSLATION_COLUMNS}
            FROM words_all_with_translate
            WHERE word_id_from = $1
            ORDER BY word_translate_id, word_id_to
            "#
        ))
        .bind(word_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Pick one translation row for a language pair at random
    pub async fn random_translation(
        &self,
        language_from: &str,
        language_to: &str,
    ) -> AppResult<Option<WordTranslationRow>> {
        let pool = self.pool.as_ref();
        let row = sqlx::query_as::<_, WordTranslationRow>(&format!(
            r#"
            SELECT {TRANSLATION_COLUMNS}
            FROM words_all_with_translate
            WHERE word_language_from = $1
              AND word_language_to = $2
            ORDER BY random()
            LIMIT 1
            "#
        ))
        .bind(language_from)
        .bind(language_to)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    pub async fn list_language_pairs(&self) -> AppResult<Vec<LanguagePair>> {
        let pool = self.pool.as_ref();
        let pairs = sqlx::query_as::<_, LanguagePair>(
            r#"
            SELECT word_language_from, word_language_to
            FROM translate_all_languages
            ORDER BY word_language_from, word_language_to
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(pairs)
    }

    /// Check if two words are already linked, in either direction
    pub async fn translation_exists_between(&self, word_a: &str, word_b: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM word_translate
                WHERE (word_id_from = $1 AND word_id_to = $2)
                   OR (word_id_from = $2 AND word_id_to = $1)
            )
            "#,
        )
        .bind(word_a)
        .bind(word_b)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Insert a translation link
    pub async fn create_translation(&self, translation: &WordTranslation) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO word_translate (word_translate_id, word_id_from, word_id_to, valid, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&translation.word_translate_id)
        .bind(&translation.word_id_from)
        .bind(&translation.word_id_to)
        .bind(translation.valid)
        .bind(&translation.note)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Translation already exists".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(())
    }
}

#[async_trait]
impl WordSpeechRepository for WordRepository {
    async fn find_speech_entry(&self, word_id: &str) -> AppResult<Option<WordSpeechEntry>> {
        let pool = self.pool.as_ref();
        let entry = sqlx::query_as::<_, WordSpeechEntry>(
            r#"
            SELECT word_id, word_content, word_language, tts_path
            FROM word_content
            WHERE word_id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    async fn assign_tts_path(&self, word_id: &str, tts_path: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            UPDATE word_content
            SET tts_path = $2
            WHERE word_id = $1 AND (tts_path IS NULL OR btrim(tts_path) = '')
            "#,
        )
        .bind(word_id)
        .bind(tts_path)
        .execute(pool)
        .await?;

        Ok(())
    }
}
