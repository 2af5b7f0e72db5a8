use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One finished round of the matching game
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MatchingRating {
    pub matching_rating_id: String,
    pub click_counter: i32,
    pub language_from: String,
    pub language_to: String,
}

/// A word that took part in a matching round
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MatchingRatingWord {
    pub matching_rating_word_id: String,
    pub matching_rating_id: String,
    pub word_id: String,
}
