use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_backend::controllers::{
    rating::RatingController, speech::SpeechController, storytelling::StorytellingController,
    word::WordController,
};
use vocab_backend::domain::{
    rating::RatingService, speech::SpeechService, storytelling::StorytellingService,
    word::WordService,
};
use vocab_backend::infrastructure::config::{Config, LogFormat, TtsProvider};
use vocab_backend::infrastructure::db::{check_connection, create_pool};
use vocab_backend::infrastructure::http::{build_router, start_http_server, Controllers};
use vocab_backend::infrastructure::repositories::{
    AudioStorageRepository, MatchingRepository, OpenAiStoryRepository, OpenAiTtsRepository,
    PollyTtsRepository, RatingRepository, StoryRepository, SupabaseStorageRepository,
    TtsRepository, WordRepository, WordSpeechRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting vocab backend on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);

    let openai_config = match &config.openai_api_key {
        Some(key) => OpenAIConfig::new().with_api_key(key.clone()),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, relying on the client's environment lookup");
            OpenAIConfig::new()
        }
    };
    let openai_client = Arc::new(OpenAIClient::with_config(openai_config));

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let word_repo = Arc::new(WordRepository::new(pool.clone()));
    let rating_repo = Arc::new(RatingRepository::new(pool.clone()));
    let matching_repo = Arc::new(MatchingRepository::new(pool.clone()));
    let storage_repo: Arc<dyn AudioStorageRepository> = Arc::new(SupabaseStorageRepository::new(
        &config.supabase_url,
        config.supabase_service_key.clone(),
    ));
    let story_repo: Arc<dyn StoryRepository> = Arc::new(OpenAiStoryRepository::new(
        openai_client.clone(),
        config.openai_chat_model.clone(),
    ));

    let tts_repo: Arc<dyn TtsRepository> = match config.tts_provider {
        TtsProvider::OpenAi => {
            tracing::info!(
                model = %config.openai_tts_model,
                voice = %config.openai_tts_voice,
                "Using OpenAI speech synthesis"
            );
            Arc::new(OpenAiTtsRepository::new(
                openai_client.clone(),
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
                config.openai_tts_speed,
            ))
        }
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
            Arc::new(PollyTtsRepository::new(polly_client))
        }
    };

    // 2. Services
    tracing::info!("Instantiating services...");
    let word_service = Arc::new(WordService::new(word_repo.clone()));
    let speech_service = Arc::new(SpeechService::new(
        word_repo.clone() as Arc<dyn WordSpeechRepository>,
        storage_repo,
        tts_repo,
        &config.tts_bucket,
        config.speech_memory_cache_enabled,
    ));
    let rating_service = Arc::new(RatingService::new(rating_repo, matching_repo));
    let storytelling_service = Arc::new(StorytellingService::new(story_repo));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        word: Arc::new(WordController::new(word_service)),
        speech: Arc::new(SpeechController::new(speech_service)),
        rating: Arc::new(RatingController::new(rating_service)),
        storytelling: Arc::new(StorytellingController::new(storytelling_service)),
    };

    let app = build_router(pool, &config, controllers);
    start_http_server(app, &config).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vocab_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
