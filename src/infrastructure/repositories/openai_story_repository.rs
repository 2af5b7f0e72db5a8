use super::story_repository::StoryRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

const STORY_SYSTEM_PROMPT: &str = "You write short reading-comprehension exercises for language learners. \
Write a story of about 120 to 180 words at A2 to B1 level, entirely in the requested language. \
Then write exactly 3 comprehension questions about it in the same language. \
Reply with a JSON object: {\"title\": string, \"story\": string, \"questions\": [string, string, string]}.";

const EVALUATION_SYSTEM_PROMPT: &str = "You are a language teacher grading a student's retelling of a text. \
Compare the retelling with the original for content coverage and grammar. \
Reply with a JSON object: {\"score\": integer 0-100, \"feedback\": string, \
\"corrections\": [{\"original\": string, \"corrected\": string, \"explanation\": string}]}. \
The feedback and explanations must be written in the requested language.";

/// OpenAI chat completions in JSON-object mode
pub struct OpenAiStoryRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiStoryRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    async fn complete_json(&self, system_prompt: &str, user_prompt: String) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .response_format(ResponseFormat::JsonObject)
            .temperature(0.7)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| format!("Failed to build system message: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| format!("Failed to build user message: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("Failed to build chat request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
            format!("OpenAI chat error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| "OpenAI returned an empty reply".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            reply_length = content.len(),
            "Chat completion finished"
        );

        Ok(content)
    }
}

#[async_trait]
impl StoryRepository for OpenAiStoryRepository {
    async fn generate_story(&self, topic: &str, language: &str) -> Result<String, String> {
        self.complete_json(
            STORY_SYSTEM_PROMPT,
            format!("Language: {}\nTopic: {}", language, topic),
        )
        .await
    }

    async fn evaluate_retelling(
        &self,
        original: &str,
        student: &str,
        language: &str,
    ) -> Result<String, String> {
        self.complete_json(
            EVALUATION_SYSTEM_PROMPT,
            format!(
                "Language: {}\n\nOriginal text:\n{}\n\nStudent retelling:\n{}",
                language, original, student
            ),
        )
        .await
    }
}
