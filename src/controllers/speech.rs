use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechService, SpeechServiceApi, TTS_CONTENT_TYPE},
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// GET /word/speech/{word_id} - MP3 pronunciation, synthesized on first request
    pub async fn get_speech(
        State(controller): State<Arc<SpeechController>>,
        Path(word_id): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let speech = controller.speech_service.get_speech(&word_id).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(TTS_CONTENT_TYPE));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("inline; filename=\"speech.mp3\""),
        );
        headers.insert(
            "x-speech-cache",
            HeaderValue::from_static(speech.cache_status.as_str()),
        );
        headers.insert(
            "x-speech-path",
            HeaderValue::from_str(&speech.tts_path)
                .map_err(|e| AppError::Internal(format!("Invalid speech path header: {}", e)))?,
        );

        Ok((StatusCode::OK, headers, Body::from(speech.audio_data)))
    }
}
