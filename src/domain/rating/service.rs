use super::dto::{MatchingRatingRequest, MatchingRatingResponse, MatchingRatingWordRequest};
use super::error::RatingServiceError;
use super::model::{MatchingRating, MatchingRatingWord};
use crate::domain::word::language::normalize_language;
use crate::infrastructure::repositories::{MatchingRepository, RatingRepository};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

pub struct RatingService {
    rating_repo: Arc<RatingRepository>,
    matching_repo: Arc<MatchingRepository>,
}

impl RatingService {
    pub fn new(rating_repo: Arc<RatingRepository>, matching_repo: Arc<MatchingRepository>) -> Self {
        Self {
            rating_repo,
            matching_repo,
        }
    }
}

#[async_trait]
pub trait RatingServiceApi: Send + Sync {
    /// Record one success signal (0 = low, 1 = high) and refresh the translation score
    async fn rate_translation(
        &self,
        word_translate_id: &str,
        rating: f64,
    ) -> Result<(), RatingServiceError>;

    /// Store a matching game round together with its words
    async fn record_matching(
        &self,
        request: MatchingRatingRequest,
    ) -> Result<MatchingRatingResponse, RatingServiceError>;
}

#[async_trait]
impl RatingServiceApi for RatingService {
    async fn rate_translation(
        &self,
        word_translate_id: &str,
        rating: f64,
    ) -> Result<(), RatingServiceError> {
        validate_rating(rating)?;

        let word_translate_id = word_translate_id.trim();
        if word_translate_id.is_empty() {
            return Err(RatingServiceError::Invalid(
                "Translation ID cannot be empty".to_string(),
            ));
        }

        if !self
            .rating_repo
            .translation_exists(word_translate_id)
            .await
            .map_err(|e| RatingServiceError::Dependency(e.to_string()))?
        {
            return Err(RatingServiceError::NotFound(format!(
                "Translation with id '{}' not found",
                word_translate_id
            )));
        }

        self.rating_repo
            .append_success_rate(word_translate_id, rating)
            .await
            .map_err(|e| RatingServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            word_translate_id = %word_translate_id,
            rating = rating,
            "Translation rating recorded"
        );

        Ok(())
    }

    async fn record_matching(
        &self,
        request: MatchingRatingRequest,
    ) -> Result<MatchingRatingResponse, RatingServiceError> {
        let click_counter = i32::try_from(request.click_counter)
            .ok()
            .filter(|c| *c >= 0)
            .ok_or_else(|| {
                RatingServiceError::Invalid("click_counter must be a non-negative integer".to_string())
            })?;
        let language_from = language(&request.language_from)?;
        let language_to = language(&request.language_to)?;

        if request.words.iter().any(|w| w.word_id.trim().is_empty()) {
            return Err(RatingServiceError::Invalid("Word ID cannot be empty".to_string()));
        }

        let matching_rating_id = match non_blank(request.matching_rating_id.as_deref()) {
            Some(id) => {
                let stored = self
                    .matching_repo
                    .rating_exists(id)
                    .await
                    .map_err(|e| RatingServiceError::Dependency(e.to_string()))?;
                if stored {
                    Uuid::new_v4().to_string()
                } else {
                    id.to_string()
                }
            }
            None => Uuid::new_v4().to_string(),
        };

        let requested_ids: Vec<String> = request
            .words
            .iter()
            .filter_map(|w| non_blank(w.matching_rating_word_id.as_deref()).map(str::to_string))
            .collect();
        let taken: HashSet<String> = self
            .matching_repo
            .find_existing_word_entry_ids(&requested_ids)
            .await
            .map_err(|e| RatingServiceError::Dependency(e.to_string()))?
            .into_iter()
            .collect();

        let rating = MatchingRating {
            matching_rating_id,
            click_counter,
            language_from,
            language_to,
        };
        let words = assign_word_entries(&rating.matching_rating_id, &request.words, &taken);

        self.matching_repo.create(&rating, &words).await?;

        tracing::info!(
            matching_rating_id = %rating.matching_rating_id,
            words = words.len(),
            "Matching rating recorded"
        );

        Ok(MatchingRatingResponse {
            matching_rating_id: rating.matching_rating_id,
        })
    }
}

fn validate_rating(rating: f64) -> Result<(), RatingServiceError> {
    if !rating.is_finite() || !(0.0..=1.0).contains(&rating) {
        return Err(RatingServiceError::Invalid(
            "Rating must be between 0 and 1".to_string(),
        ));
    }
    Ok(())
}

fn language(tag: &str) -> Result<String, RatingServiceError> {
    normalize_language(tag)
        .ok_or_else(|| RatingServiceError::Invalid(format!("Invalid language tag '{}'", tag)))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Keep client-chosen entry ids unless already stored or repeated in the request
fn assign_word_entries(
    matching_rating_id: &str,
    words: &[MatchingRatingWordRequest],
    taken: &HashSet<String>,
) -> Vec<MatchingRatingWord> {
    let mut used: HashSet<String> = HashSet::new();

    words
        .iter()
        .map(|word| {
            let matching_rating_word_id = match non_blank(word.matching_rating_word_id.as_deref()) {
                Some(id) if !taken.contains(id) && !used.contains(id) => id.to_string(),
                _ => Uuid::new_v4().to_string(),
            };
            used.insert(matching_rating_word_id.clone());

            MatchingRatingWord {
                matching_rating_word_id,
                matching_rating_id: matching_rating_id.to_string(),
                word_id: word.word_id.trim().to_string(),
            }
        })
        .collect()
}
