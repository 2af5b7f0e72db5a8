pub mod error;
pub mod service;

pub use error::SpeechServiceError;
pub use service::{
    derive_tts_path, tts_bucket_spec, CacheStatus, SpeechAudio, SpeechService, SpeechServiceApi,
    TTS_CONTENT_TYPE,
};
