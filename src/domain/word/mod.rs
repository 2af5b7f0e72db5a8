pub mod dto;
pub mod error;
pub mod language;
pub mod model;
pub mod service;

pub use dto::{
    CreateTranslationRequest, CreateWordRequest, CreatedTranslationResponse, RandomWordQuery,
    WordContentOut, WordContentTranslateOut,
};
pub use error::WordServiceError;
pub use model::{LanguagePair, Word, WordTranslation, WordTranslationRow};
pub use service::{WordService, WordServiceApi};
