pub mod audio_storage_repository;
pub mod matching_repository;
pub mod openai_story_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod rating_repository;
pub mod story_repository;
pub mod supabase_storage_repository;
pub mod tts_repository;
pub mod word_repository;
pub mod word_speech_repository;

pub use audio_storage_repository::{AudioStorageRepository, BucketSpec, StorageError};
pub use matching_repository::MatchingRepository;
pub use openai_story_repository::OpenAiStoryRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use rating_repository::RatingRepository;
pub use story_repository::StoryRepository;
pub use supabase_storage_repository::SupabaseStorageRepository;
pub use tts_repository::TtsRepository;
pub use word_repository::WordRepository;
pub use word_speech_repository::{WordSpeechEntry, WordSpeechRepository};
