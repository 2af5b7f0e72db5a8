use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MatchingRatingWordRequest {
    #[serde(default)]
    pub matching_rating_word_id: Option<String>,
    pub word_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchingRatingRequest {
    #[serde(default)]
    pub matching_rating_id: Option<String>,
    pub click_counter: i64,
    pub language_from: String,
    pub language_to: String,
    #[serde(default)]
    pub words: Vec<MatchingRatingWordRequest>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchingRatingResponse {
    pub matching_rating_id: String,
}
