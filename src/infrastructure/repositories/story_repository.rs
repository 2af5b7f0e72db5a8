use async_trait::async_trait;

/// Language model backing the storytelling features.
///
/// Both methods return the model's raw JSON reply; callers parse it.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Ask for `{"title", "story", "questions": [..]}` about `topic` in `language`
    async fn generate_story(&self, topic: &str, language: &str) -> Result<String, String>;

    /// Ask for `{"score", "feedback", "corrections": [..]}` comparing a retelling to its source
    async fn evaluate_retelling(
        &self,
        original: &str,
        student: &str,
        language: &str,
    ) -> Result<String, String>;
}
