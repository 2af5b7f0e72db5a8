use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::FromRow;

/// The slice of a word the speech flow needs
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WordSpeechEntry {
    pub word_id: String,
    pub word_content: String,
    pub word_language: String,
    pub tts_path: Option<String>,
}

/// Word lookup and cached-audio-path bookkeeping for speech materialization.
#[async_trait]
pub trait WordSpeechRepository: Send + Sync {
    /// Find the word text and its current cached audio path
    async fn find_speech_entry(&self, word_id: &str) -> AppResult<Option<WordSpeechEntry>>;

    /// Store `tts_path` on the word unless one is already set. A blank path counts as unset.
    ///
    /// Re-running with the same path is a no-op, so concurrent callers are safe.
    async fn assign_tts_path(&self, word_id: &str, tts_path: &str) -> AppResult<()>;
}
