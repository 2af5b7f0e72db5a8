use crate::domain::rating::{MatchingRating, MatchingRatingWord};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

pub struct MatchingRepository {
    pool: Arc<DbPool>,
}

impl MatchingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn rating_exists(&self, matching_rating_id: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM matching_rating WHERE matching_rating_id = $1)",
        )
        .bind(matching_rating_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Which of the given word entry ids are already stored
    pub async fn find_existing_word_entry_ids(&self, ids: &[String]) -> AppResult<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let pool = self.pool.as_ref();
        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT matching_rating_word_id
            FROM matching_rating_word
            WHERE matching_rating_word_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(existing)
    }

    /// Insert a round and all its words atomically
    pub async fn create(&self, rating: &MatchingRating, words: &[MatchingRatingWord]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO matching_rating (matching_rating_id, click_counter, language_from, language_to, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&rating.matching_rating_id)
        .bind(rating.click_counter)
        .bind(&rating.language_from)
        .bind(&rating.language_to)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for word in words {
            sqlx::query(
                r#"
                INSERT INTO matching_rating_word (matching_rating_word_id, matching_rating_id, word_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&word.matching_rating_word_id)
            .bind(&word.matching_rating_id)
            .bind(&word.word_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::BadRequest(format!("Unknown word_id '{}'", word.word_id));
                    }
                }
                AppError::Database(e)
            })?;
        }

        tx.commit().await?;

        Ok(())
    }
}
