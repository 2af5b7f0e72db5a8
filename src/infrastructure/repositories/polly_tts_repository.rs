use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_INPUT_LENGTH: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }
}

/// Neural Polly voice for a language tag. Polly has no Czech voice.
pub fn get_voice_for_language(language: &str) -> Option<&'static str> {
    match language.to_ascii_uppercase().as_str() {
        "EN" => Some("Joanna"),
        "ES" => Some("Lupe"),
        "FR" => Some("Lea"),
        "DE" => Some("Vicki"),
        "IT" => Some("Bianca"),
        "PT" => Some("Ines"),
        "PL" => Some("Ola"),
        "NL" => Some("Laura"),
        _ => None,
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, String> {
        if text.chars().count() > MAX_INPUT_LENGTH {
            return Err(format!(
                "text exceeds {} characters accepted by AWS Polly",
                MAX_INPUT_LENGTH
            ));
        }

        let voice_name = get_voice_for_language(language)
            .ok_or_else(|| format!("no Polly voice available for language {}", language))?;
        let voice_id = VoiceId::from(voice_name);
        let engine = Engine::Neural;
        let start_time = std::time::Instant::now();

        tracing::info!(
            language = language,
            voice = voice_name,
            engine = ?engine,
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    language = language,
                    voice = voice_name,
                    engine = ?engine,
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_data = audio_stream.into_bytes().to_vec();

        tracing::info!(
            provider = "polly",
            voice = voice_name,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
