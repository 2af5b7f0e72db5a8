use super::model::{Word, WordTranslation, WordTranslationRow};
use serde::{Deserialize, Serialize};

/// Translation target inside a word response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordContentTranslateOut {
    pub word_id: String,
    pub word_content: String,
    pub word_language: String,
    pub valid: bool,
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_translate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
}

/// Word with its translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordContentOut {
    pub word_id: String,
    pub word_content: String,
    pub word_language: String,
    pub valid: bool,
    pub note: Option<String>,
    pub translate: Vec<WordContentTranslateOut>,
}

/// Request for POST /word
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    #[serde(default)]
    pub word_id: Option<String>,
    pub word_content: String,
    pub word_language: String,
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_valid() -> bool {
    true
}

/// Request for POST /word/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTranslationRequest {
    #[serde(default)]
    pub word_translate_id: Option<String>,
    pub word_id_from: String,
    pub word_id_to: String,
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// Query for GET /word/random/{id_seed}
#[derive(Debug, Default, Deserialize)]
pub struct RandomWordQuery {
    pub word_language_from: Option<String>,
    pub word_language_to: Option<String>,
}

impl From<Word> for WordContentOut {
    fn from(word: Word) -> Self {
        Self {
            word_id: word.word_id,
            word_content: word.word_content,
            word_language: word.word_language,
            valid: word.valid,
            note: word.note,
            translate: Vec::new(),
        }
    }
}

impl WordContentTranslateOut {
    /// Target side of a view row, if the row has one
    pub fn from_row(row: &WordTranslationRow) -> Option<Self> {
        Some(Self {
            word_id: row.word_id_to.clone()?,
            word_content: row.word_content_to.clone()?,
            word_language: row.word_language_to.clone()?,
            valid: row.valid_to.unwrap_or(false),
            note: row.note_to.clone(),
            word_translate_id: row.word_translate_id.clone(),
            success_rate: row.success_rate,
        })
    }
}

/// Fold view rows into one entry per source word, keeping first-seen order
pub fn group_translation_rows(rows: Vec<WordTranslationRow>) -> Vec<WordContentOut> {
    let mut words: Vec<WordContentOut> = Vec::new();

    for row in rows {
        let target = WordContentTranslateOut::from_row(&row);

        let index = match words.iter().position(|w| w.word_id == row.word_id_from) {
            Some(index) => index,
            None => {
                words.push(WordContentOut {
                    word_id: row.word_id_from,
                    word_content: row.word_content_from,
                    word_language: row.word_language_from,
                    valid: row.valid_from,
                    note: row.note_from,
                    translate: Vec::new(),
                });
                words.len() - 1
            }
        };

        if let Some(target) = target {
            words[index].translate.push(target);
        }
    }

    words
}

impl From<WordTranslation> for CreatedTranslationResponse {
    fn from(translation: WordTranslation) -> Self {
        Self {
            word_translate_id: translation.word_translate_id,
            word_id_from: translation.word_id_from,
            word_id_to: translation.word_id_to,
            valid: translation.valid,
            note: translation.note,
        }
    }
}

/// Response body for POST /word/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedTranslationResponse {
    pub word_translate_id: String,
    pub word_id_from: String,
    pub word_id_to: String,
    pub valid: bool,
    pub note: Option<String>,
}
