use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (OpenAI, AWS Polly, ...).
///
/// Implementations own provider-specific voice selection and output format;
/// callers always receive MP3 bytes.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` spoken in `language` (an upper-case tag such as `EN`).
    ///
    /// # Errors
    /// Returns error if the provider is unreachable, rejects the request or has
    /// no voice for the language.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, String>;
}
