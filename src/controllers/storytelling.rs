use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        shared::Envelope,
        storytelling::{
            EvaluationOut, EvaluationRequest, StoryOut, StoryRequest, StorytellingService,
            StorytellingServiceApi,
        },
    },
    error::AppResult,
};

pub struct StorytellingController {
    storytelling_service: Arc<StorytellingService>,
}

impl StorytellingController {
    pub fn new(storytelling_service: Arc<StorytellingService>) -> Self {
        Self {
            storytelling_service,
        }
    }

    /// POST /storytelling/story - Short story with comprehension questions
    pub async fn generate_story(
        State(controller): State<Arc<StorytellingController>>,
        Json(request): Json<StoryRequest>,
    ) -> AppResult<Json<Envelope<StoryOut>>> {
        let story = controller.storytelling_service.generate_story(request).await?;
        Ok(Json(Envelope::ok(story)))
    }

    /// POST /storytelling/evaluation - Grade a retelling against its source
    pub async fn evaluate_retelling(
        State(controller): State<Arc<StorytellingController>>,
        Json(request): Json<EvaluationRequest>,
    ) -> AppResult<Json<Envelope<EvaluationOut>>> {
        let evaluation = controller
            .storytelling_service
            .evaluate_retelling(request)
            .await?;
        Ok(Json(Envelope::ok(evaluation)))
    }
}
