use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A learnable vocabulary entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Word {
    pub word_id: String,
    pub word_content: String,
    pub word_language: String,
    pub valid: bool,
    pub note: Option<String>,
    pub tts_path: Option<String>,
}

/// One row of the `words_all_with_translate` view.
///
/// The `*_to` side is empty when the source word has no translation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordTranslationRow {
    pub word_id_from: String,
    pub word_content_from: String,
    pub word_language_from: String,
    pub valid_from: bool,
    pub note_from: Option<String>,
    pub word_translate_id: Option<String>,
    pub word_id_to: Option<String>,
    pub word_content_to: Option<String>,
    pub word_language_to: Option<String>,
    pub valid_to: Option<bool>,
    pub note_to: Option<String>,
    pub success_rate: Option<f64>,
}

/// A directed translation link between two words
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordTranslation {
    pub word_translate_id: String,
    pub word_id_from: String,
    pub word_id_to: String,
    pub valid: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LanguagePair {
    pub word_language_from: String,
    pub word_language_to: String,
}
