use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // CORS
    pub allowed_origins: Vec<String>,
    // Supabase Storage
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub tts_bucket: String,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    pub openai_tts_speed: f32,
    pub openai_chat_model: String,
    pub aws_region: String,
    // In-process audio cache
    pub speech_memory_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    OpenAi,
    Polly,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            allowed_origins: parse_origins(&env::var("API_ACCESS_URL").unwrap_or_default()),
            supabase_url: env::var("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_service_key: env::var("SUPABASE_SERVICE_KEY")?,
            tts_bucket: env::var("TTS_BUCKET").unwrap_or_else(|_| "words_tts".to_string()),
            tts_provider: match env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "openai".to_string())
                .to_lowercase()
                .as_str()
            {
                "polly" => TtsProvider::Polly,
                _ => TtsProvider::OpenAi,
            },
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_tts_model: env::var("OPENAI_TTS_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini-tts".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_else(|_| "alloy".to_string()),
            openai_tts_speed: env::var("OPENAI_TTS_SPEED")
                .unwrap_or_else(|_| "0.9".to_string())
                .parse()?,
            openai_chat_model: env::var("OPENAI_CHAT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            speech_memory_cache_enabled: env::var("SPEECH_MEMORY_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
