use super::dto::{CorrectionOut, EvaluationOut, EvaluationRequest, StoryOut, StoryRequest};
use super::error::StorytellingServiceError;
use crate::domain::word::language::normalize_language_or;
use crate::infrastructure::repositories::StoryRepository;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const MAX_TOPIC_LENGTH: usize = 200;
const MAX_TEXT_LENGTH: usize = 5000;
const DEFAULT_STORY_LANGUAGE: &str = "EN";

pub struct StorytellingService {
    story_repo: Arc<dyn StoryRepository>,
}

impl StorytellingService {
    pub fn new(story_repo: Arc<dyn StoryRepository>) -> Self {
        Self { story_repo }
    }
}

#[async_trait]
pub trait StorytellingServiceApi: Send + Sync {
    async fn generate_story(&self, request: StoryRequest) -> Result<StoryOut, StorytellingServiceError>;

    async fn evaluate_retelling(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationOut, StorytellingServiceError>;
}

#[async_trait]
impl StorytellingServiceApi for StorytellingService {
    async fn generate_story(&self, request: StoryRequest) -> Result<StoryOut, StorytellingServiceError> {
        let topic = bounded_text("topic", &request.topic, MAX_TOPIC_LENGTH)?;
        let language = language(request.language.as_deref())?;

        let reply = self
            .story_repo
            .generate_story(topic, &language)
            .await
            .map_err(StorytellingServiceError::ModelUnavailable)?;

        let story = parse_story_reply(&reply).map_err(|e| {
            tracing::warn!(error = %e, topic = %topic, "Unusable story reply");
            StorytellingServiceError::ModelUnavailable(e)
        })?;

        tracing::info!(
            topic = %topic,
            language = %language,
            questions = story.questions.len(),
            "Story generated"
        );

        Ok(StoryOut {
            topic: topic.to_string(),
            language,
            title: story.title,
            story: story.story,
            questions: story.questions,
        })
    }

    async fn evaluate_retelling(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationOut, StorytellingServiceError> {
        let original = bounded_text("original", &request.original, MAX_TEXT_LENGTH)?;
        let student = bounded_text("student", &request.student, MAX_TEXT_LENGTH)?;
        let language = language(request.language.as_deref())?;

        let reply = self
            .story_repo
            .evaluate_retelling(original, student, &language)
            .await
            .map_err(StorytellingServiceError::ModelUnavailable)?;

        let evaluation = parse_evaluation_reply(&reply).map_err(|e| {
            tracing::warn!(error = %e, "Unusable evaluation reply");
            StorytellingServiceError::ModelUnavailable(e)
        })?;

        tracing::info!(
            language = %language,
            score = evaluation.score,
            corrections = evaluation.corrections.len(),
            "Retelling evaluated"
        );

        Ok(evaluation)
    }
}

fn bounded_text<'a>(
    field: &str,
    value: &'a str,
    max_length: usize,
) -> Result<&'a str, StorytellingServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StorytellingServiceError::Invalid(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.chars().count() > max_length {
        return Err(StorytellingServiceError::TooLarge(format!(
            "{} must be {} characters or less",
            field, max_length
        )));
    }
    Ok(value)
}

fn language(tag: Option<&str>) -> Result<String, StorytellingServiceError> {
    normalize_language_or(tag, DEFAULT_STORY_LANGUAGE)
        .ok_or_else(|| StorytellingServiceError::Invalid("Invalid language tag".to_string()))
}

#[derive(Debug, Deserialize)]
struct StoryReply {
    title: String,
    story: String,
    #[serde(default)]
    questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EvaluationReply {
    score: f64,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    corrections: Vec<CorrectionOut>,
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

fn parse_story_reply(reply: &str) -> Result<StoryReply, String> {
    let mut story: StoryReply = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| format!("invalid story JSON: {}", e))?;

    story.title = story.title.trim().to_string();
    story.story = story.story.trim().to_string();
    story.questions = story
        .questions
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();

    if story.story.is_empty() {
        return Err("story text is empty".to_string());
    }
    if story.questions.is_empty() {
        return Err("story has no questions".to_string());
    }

    Ok(story)
}

fn parse_evaluation_reply(reply: &str) -> Result<EvaluationOut, String> {
    let evaluation: EvaluationReply = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| format!("invalid evaluation JSON: {}", e))?;

    if !evaluation.score.is_finite() {
        return Err("score is not a number".to_string());
    }

    Ok(EvaluationOut {
        score: evaluation.score.round().clamp(0.0, 100.0) as u8,
        feedback: evaluation.feedback.trim().to_string(),
        corrections: evaluation
            .corrections
            .into_iter()
            .filter(|c| !c.original.trim().is_empty() || !c.corrected.trim().is_empty())
            .collect(),
    })
}
