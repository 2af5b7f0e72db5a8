use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        rating::{MatchingRatingRequest, MatchingRatingResponse, RatingService, RatingServiceApi},
        shared::Envelope,
    },
    error::AppResult,
};

pub struct RatingController {
    rating_service: Arc<RatingService>,
}

impl RatingController {
    pub fn new(rating_service: Arc<RatingService>) -> Self {
        Self { rating_service }
    }

    /// POST /word/rating/{word_translate_id}/{rating}
    pub async fn rate_translation(
        State(controller): State<Arc<RatingController>>,
        Path((word_translate_id, rating)): Path<(String, f64)>,
    ) -> AppResult<Json<Envelope<()>>> {
        controller
            .rating_service
            .rate_translation(&word_translate_id, rating)
            .await?;
        Ok(Json(Envelope::ack()))
    }

    /// POST /matching/rating
    pub async fn record_matching(
        State(controller): State<Arc<RatingController>>,
        Json(request): Json<MatchingRatingRequest>,
    ) -> AppResult<(StatusCode, Json<Envelope<MatchingRatingResponse>>)> {
        let created = controller.rating_service.record_matching(request).await?;
        Ok((StatusCode::CREATED, Json(Envelope::ok(created))))
    }
}
