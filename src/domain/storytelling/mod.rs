pub mod dto;
pub mod error;
pub mod service;

pub use dto::{CorrectionOut, EvaluationOut, EvaluationRequest, StoryOut, StoryRequest};
pub use error::StorytellingServiceError;
pub use service::{StorytellingService, StorytellingServiceApi};
