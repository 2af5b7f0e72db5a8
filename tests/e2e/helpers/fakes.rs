use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use vocab_backend::error::AppResult;
use vocab_backend::infrastructure::repositories::{
    AudioStorageRepository, BucketSpec, StorageError, StoryRepository, TtsRepository,
    WordSpeechEntry, WordSpeechRepository,
};

/// Word lookup for the speech flow without a database
#[derive(Default)]
pub struct InMemoryWordSpeech {
    words: Mutex<HashMap<String, WordSpeechEntry>>,
}

#[allow(dead_code)]
impl InMemoryWordSpeech {
    pub fn insert(&self, word_id: &str, content: &str, language: &str, tts_path: Option<&str>) {
        self.words.lock().insert(
            word_id.to_string(),
            WordSpeechEntry {
                word_id: word_id.to_string(),
                word_content: content.to_string(),
                word_language: language.to_string(),
                tts_path: tts_path.map(str::to_string),
            },
        );
    }

    pub fn tts_path(&self, word_id: &str) -> Option<String> {
        self.words.lock().get(word_id).and_then(|w| w.tts_path.clone())
    }
}

#[async_trait]
impl WordSpeechRepository for InMemoryWordSpeech {
    async fn find_speech_entry(&self, word_id: &str) -> AppResult<Option<WordSpeechEntry>> {
        Ok(self.words.lock().get(word_id).cloned())
    }

    async fn assign_tts_path(&self, word_id: &str, tts_path: &str) -> AppResult<()> {
        if let Some(word) = self.words.lock().get_mut(word_id) {
            if word.tts_path.as_deref().map_or(true, |p| p.trim().is_empty()) {
                word.tts_path = Some(tts_path.to_string());
            }
        }
        Ok(())
    }
}

/// Object storage with create-only uploads
#[derive(Default)]
pub struct InMemoryAudioStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    buckets: Mutex<Vec<BucketSpec>>,
    uploads: AtomicUsize,
}

#[allow(dead_code)]
impl InMemoryAudioStorage {
    fn key(bucket: &str, path: &str) -> String {
        format!("{}/{}", bucket, path)
    }

    pub fn put(&self, bucket: &str, path: &str, data: &[u8]) {
        self.objects
            .lock()
            .insert(Self::key(bucket, path), data.to_vec());
    }

    pub fn object(&self, bucket: &str, path: &str) -> Option<Vec<u8>> {
        self.objects.lock().get(&Self::key(bucket, path)).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().len()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn bucket(&self, name: &str) -> Option<BucketSpec> {
        self.buckets.lock().iter().find(|b| b.name == name).cloned()
    }
}

#[async_trait]
impl AudioStorageRepository for InMemoryAudioStorage {
    async fn ensure_bucket(&self, spec: &BucketSpec) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock();
        if !buckets.iter().any(|b| b.name == spec.name) {
            buckets.push(spec.clone());
        }
        Ok(())
    }

    async fn exists(&self, bucket: &str, path: &str) -> Result<bool, StorageError> {
        Ok(self.objects.lock().contains_key(&Self::key(bucket, path)))
    }

    async fn upload_create_only(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let mut objects = self.objects.lock();
        let key = Self::key(bucket, path);
        if objects.contains_key(&key) {
            return Err(StorageError::AlreadyExists);
        }
        objects.insert(key, data);
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        self.object(bucket, path).ok_or(StorageError::NotFound)
    }
}

/// Synthesizer returning a fixed-size payload and counting calls
pub struct CountingSynthesizer {
    calls: AtomicUsize,
    payload_size: usize,
    failing: Mutex<bool>,
}

impl Default for CountingSynthesizer {
    fn default() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payload_size: 2048,
            failing: Mutex::new(false),
        }
    }
}

#[allow(dead_code)]
impl CountingSynthesizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }
}

#[async_trait]
impl TtsRepository for CountingSynthesizer {
    async fn synthesize(&self, text: &str, _language: &str) -> Result<Vec<u8>, String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock() {
            return Err("synthesizer offline".to_string());
        }

        // Distinct per call so a lost race is observable
        let seed = (text.len() + call) as u8;
        Ok((0..self.payload_size)
            .map(|i| seed.wrapping_add(i as u8))
            .collect())
    }
}

/// Language model returning canned replies
pub struct ScriptedStoryModel {
    story_reply: Mutex<Result<String, String>>,
    evaluation_reply: Mutex<Result<String, String>>,
}

impl Default for ScriptedStoryModel {
    fn default() -> Self {
        Self {
            story_reply: Mutex::new(Ok(serde_json::json!({
                "title": "Ztracený pes",
                "story": "Pes Max se ztratil v parku. Děti ho hledaly celý den.",
                "questions": ["Jak se jmenuje pes?", "Kde se ztratil?", "Kdo ho hledal?"]
            })
            .to_string())),
            evaluation_reply: Mutex::new(Ok(serde_json::json!({
                "score": 82,
                "feedback": "Good retelling with small grammar mistakes.",
                "corrections": [
                    {"original": "he go", "corrected": "he goes", "explanation": "third person singular"}
                ]
            })
            .to_string())),
        }
    }
}

#[allow(dead_code)]
impl ScriptedStoryModel {
    pub fn set_story_reply(&self, reply: Result<&str, &str>) {
        *self.story_reply.lock() = reply.map(str::to_string).map_err(str::to_string);
    }

    pub fn set_evaluation_reply(&self, reply: Result<&str, &str>) {
        *self.evaluation_reply.lock() = reply.map(str::to_string).map_err(str::to_string);
    }
}

#[async_trait]
impl StoryRepository for ScriptedStoryModel {
    async fn generate_story(&self, _topic: &str, _language: &str) -> Result<String, String> {
        self.story_reply.lock().clone()
    }

    async fn evaluate_retelling(
        &self,
        _original: &str,
        _student: &str,
        _language: &str,
    ) -> Result<String, String> {
        self.evaluation_reply.lock().clone()
    }
}
