use super::error::SpeechServiceError;
use crate::infrastructure::repositories::{
    AudioStorageRepository, BucketSpec, StorageError, TtsRepository, WordSpeechEntry,
    WordSpeechRepository,
};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

pub const TTS_FOLDER: &str = "mp3";
pub const TTS_FILE_EXTENSION: &str = "mp3";
pub const TTS_CONTENT_TYPE: &str = "audio/mpeg";
/// Per-object ceiling declared on the bucket
pub const TTS_FILE_SIZE_LIMIT: u64 = 50 * 1024;

const MEMORY_CACHE_CAPACITY: u64 = 1000;
const MEMORY_CACHE_IDLE: Duration = Duration::from_secs(30 * 60);

/// Deterministic storage path for a word's audio
pub fn derive_tts_path(word_id: &str) -> String {
    format!("{}/{}.{}", TTS_FOLDER, word_id, TTS_FILE_EXTENSION)
}

/// Private bucket accepting only MP3 objects up to [`TTS_FILE_SIZE_LIMIT`]
pub fn tts_bucket_spec(name: &str) -> BucketSpec {
    BucketSpec {
        name: name.to_string(),
        public: false,
        allowed_mime_types: vec![TTS_CONTENT_TYPE.to_string()],
        file_size_limit: TTS_FILE_SIZE_LIMIT,
    }
}

/// How the returned audio was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Already in storage (or in the in-process cache)
    Hit,
    /// Synthesized and uploaded by this request
    Miss,
    /// Synthesized, but another request uploaded first
    Contended,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Miss => "miss",
            CacheStatus::Contended => "contended",
        }
    }
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub word_id: String,
    pub tts_path: String,
    pub audio_data: Vec<u8>,
    pub cache_status: CacheStatus,
}

pub struct SpeechService {
    word_repo: Arc<dyn WordSpeechRepository>,
    storage_repo: Arc<dyn AudioStorageRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    bucket: BucketSpec,
    memory_cache: Option<Cache<String, Vec<u8>>>,
}

impl SpeechService {
    pub fn new(
        word_repo: Arc<dyn WordSpeechRepository>,
        storage_repo: Arc<dyn AudioStorageRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        bucket_name: &str,
        memory_cache_enabled: bool,
    ) -> Self {
        // Only ever holds bytes downloaded from storage, keyed by object path
        let memory_cache = if memory_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(MEMORY_CACHE_CAPACITY)
                    .time_to_idle(MEMORY_CACHE_IDLE)
                    .build(),
            )
        } else {
            None
        };

        Self {
            word_repo,
            storage_repo,
            tts_repo,
            bucket: tts_bucket_spec(bucket_name),
            memory_cache,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Return MP3 audio for a word, synthesizing and caching it on first access.
    ///
    /// This operation:
    /// - Reserves the word's storage path before synthesis
    /// - Synthesizes only when storage has no object at that path
    /// - Treats a lost create-only upload as a warm cache
    /// - Always returns the bytes downloaded from storage
    async fn get_speech(&self, word_id: &str) -> Result<SpeechAudio, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn get_speech(&self, word_id: &str) -> Result<SpeechAudio, SpeechServiceError> {
        let word_id = word_id.trim();
        if word_id.is_empty() {
            return Err(SpeechServiceError::Invalid("Word ID cannot be empty".to_string()));
        }

        // 1. Look up the word
        let entry = self
            .word_repo
            .find_speech_entry(word_id)
            .await?
            .ok_or(SpeechServiceError::WordNotFound)?;

        // 2. Reserve the storage path
        let tts_path = self.resolve_tts_path(&entry).await?;

        if let Some(cache) = &self.memory_cache {
            if let Some(audio_data) = cache.get(&tts_path).await {
                tracing::debug!(
                    word_id = %entry.word_id,
                    tts_path = %tts_path,
                    audio_size = audio_data.len(),
                    "Speech served from memory cache"
                );
                return Ok(SpeechAudio {
                    word_id: entry.word_id,
                    tts_path,
                    audio_data,
                    cache_status: CacheStatus::Hit,
                });
            }
        }

        // 3. Make sure the bucket exists
        self.storage_repo
            .ensure_bucket(&self.bucket)
            .await
            .map_err(|e| SpeechServiceError::Storage(e.to_string()))?;

        // 4. Existence check is only a fast path; the create-only upload decides
        let exists = self
            .storage_repo
            .exists(&self.bucket.name, &tts_path)
            .await
            .map_err(|e| SpeechServiceError::Storage(e.to_string()))?;

        // 5-6. Synthesize and upload on a miss
        let cache_status = if exists {
            tracing::info!(word_id = %entry.word_id, tts_path = %tts_path, "Speech cache hit");
            CacheStatus::Hit
        } else {
            tracing::info!(word_id = %entry.word_id, tts_path = %tts_path, "Speech cache miss");
            self.populate(&entry, &tts_path).await?
        };

        // 7. Storage is the source of truth for what we return
        let audio_data = self
            .storage_repo
            .download(&self.bucket.name, &tts_path)
            .await
            .map_err(|e| SpeechServiceError::Storage(e.to_string()))?;

        tracing::info!(
            word_id = %entry.word_id,
            tts_path = %tts_path,
            cache_status = %cache_status,
            audio_size = audio_data.len(),
            "Speech downloaded from storage"
        );

        if let Some(cache) = &self.memory_cache {
            cache.insert(tts_path.clone(), audio_data.clone()).await;
        }

        Ok(SpeechAudio {
            word_id: entry.word_id,
            tts_path,
            audio_data,
            cache_status,
        })
    }
}

impl SpeechService {
    /// Use the stored path, or derive one and persist it before any synthesis
    async fn resolve_tts_path(&self, entry: &WordSpeechEntry) -> Result<String, SpeechServiceError> {
        if let Some(path) = entry.tts_path.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(path.to_string());
        }

        let tts_path = derive_tts_path(&entry.word_id);
        self.word_repo
            .assign_tts_path(&entry.word_id, &tts_path)
            .await?;

        tracing::info!(
            word_id = %entry.word_id,
            tts_path = %tts_path,
            "Speech path reserved"
        );

        Ok(tts_path)
    }

    async fn populate(
        &self,
        entry: &WordSpeechEntry,
        tts_path: &str,
    ) -> Result<CacheStatus, SpeechServiceError> {
        let audio_data = self
            .tts_repo
            .synthesize(&entry.word_content, &entry.word_language)
            .await
            .map_err(|e| {
                tracing::warn!(
                    word_id = %entry.word_id,
                    error = %e,
                    "Speech synthesis failed"
                );
                SpeechServiceError::SynthesisUnavailable(e)
            })?;

        if audio_data.is_empty() {
            tracing::warn!(word_id = %entry.word_id, "Speech synthesis returned no audio");
            return Err(SpeechServiceError::SynthesisUnavailable(
                "synthesizer returned no audio".to_string(),
            ));
        }

        match self
            .storage_repo
            .upload_create_only(&self.bucket.name, tts_path, audio_data, TTS_CONTENT_TYPE)
            .await
        {
            Ok(()) => {
                tracing::info!(word_id = %entry.word_id, tts_path, "Speech uploaded to storage");
                Ok(CacheStatus::Miss)
            }
            Err(StorageError::AlreadyExists) => {
                tracing::info!(
                    word_id = %entry.word_id,
                    tts_path,
                    "Speech upload lost the race, using the stored object"
                );
                Ok(CacheStatus::Contended)
            }
            Err(e) => Err(SpeechServiceError::Storage(e.to_string())),
        }
    }
}
