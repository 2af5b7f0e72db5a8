use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{
    health, rating::RatingController, speech::SpeechController,
    storytelling::StorytellingController, word::WordController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::middleware::request_id_middleware;

/// Every controller the router mounts
pub struct Controllers {
    pub word: Arc<WordController>,
    pub speech: Arc<SpeechController>,
    pub rating: Arc<RatingController>,
    pub storytelling: Arc<StorytellingController>,
}

/// Assemble all routes with CORS, request ids and tracing
pub fn build_router(pool: Arc<DbPool>, config: &Config, controllers: Controllers) -> Router {
    let word_routes = Router::new()
        .route(
            "/words/all/:language_from/:language_to",
            get(WordController::list_words),
        )
        .route("/word/detail/:word_id", get(WordController::get_word_detail))
        .route("/word", post(WordController::create_word))
        .route("/word/translate", post(WordController::create_translation))
        .route("/word/random/:id_seed", get(WordController::random_word))
        .route("/word/languages", get(WordController::list_language_pairs))
        .with_state(controllers.word);

    let speech_routes = Router::new()
        .route("/word/speech/:word_id", get(SpeechController::get_speech))
        .with_state(controllers.speech);

    let rating_routes = Router::new()
        .route(
            "/word/rating/:word_translate_id/:rating",
            post(RatingController::rate_translation),
        )
        .route("/matching/rating", post(RatingController::record_matching))
        .with_state(controllers.rating);

    let storytelling_routes = Router::new()
        .route(
            "/storytelling/story",
            post(StorytellingController::generate_story),
        )
        .route(
            "/storytelling/evaluation",
            post(StorytellingController::evaluate_retelling),
        )
        .with_state(controllers.storytelling);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(word_routes)
        .merge(speech_routes)
        .merge(rating_routes)
        .merge(storytelling_routes)
        .layer(cors_layer(config))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if config.is_development() {
        CorsLayer::permissive()
    } else {
        // Same-origin only
        CorsLayer::new()
    }
}

/// Bind to the configured address and serve until the process stops
pub async fn start_http_server(
    app: Router,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
