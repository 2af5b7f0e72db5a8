use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

pub struct RatingRepository {
    pool: Arc<DbPool>,
}

impl RatingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn translation_exists(&self, word_translate_id: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM word_translate WHERE word_translate_id = $1)",
        )
        .bind(word_translate_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Append a success sample and fold all samples into the translation score
    pub async fn append_success_rate(&self, word_translate_id: &str, rating: f64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO word_translate_success_rate (word_translate_id, success_rate, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(word_translate_id)
        .bind(rating)
        .bind(chrono::Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query("SELECT translate_rating_recalculation($1)")
            .bind(word_translate_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
