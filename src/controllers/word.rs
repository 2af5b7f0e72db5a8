use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        shared::Envelope,
        word::{
            CreateTranslationRequest, CreateWordRequest, CreatedTranslationResponse, LanguagePair,
            RandomWordQuery, WordContentOut, WordService, WordServiceApi, WordTranslationRow,
        },
    },
    error::AppResult,
};

pub struct WordController {
    word_service: Arc<WordService>,
}

impl WordController {
    pub fn new(word_service: Arc<WordService>) -> Self {
        Self { word_service }
    }

    /// GET /words/all/{language_from}/{language_to} - Words of one language with translations
    pub async fn list_words(
        State(controller): State<Arc<WordController>>,
        Path((language_from, language_to)): Path<(String, String)>,
    ) -> AppResult<Json<Envelope<Vec<WordContentOut>>>> {
        let words = controller
            .word_service
            .list_words(&language_from, &language_to)
            .await?;
        Ok(Json(Envelope::ok(words)))
    }

    /// GET /word/detail/{word_id}
    pub async fn get_word_detail(
        State(controller): State<Arc<WordController>>,
        Path(word_id): Path<String>,
    ) -> AppResult<Json<Envelope<Vec<WordContentOut>>>> {
        let words = controller.word_service.get_word_detail(&word_id).await?;
        Ok(Json(Envelope::ok(words)))
    }

    /// POST /word
    pub async fn create_word(
        State(controller): State<Arc<WordController>>,
        Json(request): Json<CreateWordRequest>,
    ) -> AppResult<(StatusCode, Json<Envelope<Vec<WordContentOut>>>)> {
        let word = controller.word_service.create_word(request).await?;
        Ok((StatusCode::CREATED, Json(Envelope::ok(vec![word]))))
    }

    /// POST /word/translate - Link two existing words
    pub async fn create_translation(
        State(controller): State<Arc<WordController>>,
        Json(request): Json<CreateTranslationRequest>,
    ) -> AppResult<(StatusCode, Json<Envelope<CreatedTranslationResponse>>)> {
        let translation = controller.word_service.create_translation(request).await?;
        Ok((StatusCode::CREATED, Json(Envelope::ok(translation))))
    }

    /// GET /word/random/{id_seed}
    pub async fn random_word(
        State(controller): State<Arc<WordController>>,
        Path(id_seed): Path<i64>,
        Query(query): Query<RandomWordQuery>,
    ) -> AppResult<Json<Envelope<Option<WordTranslationRow>>>> {
        let row = controller
            .word_service
            .random_word(id_seed, query.word_language_from, query.word_language_to)
            .await?;
        Ok(Json(Envelope::ok(row)))
    }

    /// GET /word/languages - Distinct translation language pairs
    pub async fn list_language_pairs(
        State(controller): State<Arc<WordController>>,
    ) -> AppResult<Json<Envelope<Vec<LanguagePair>>>> {
        let pairs = controller.word_service.list_language_pairs().await?;
        Ok(Json(Envelope::ok(pairs)))
    }
}
