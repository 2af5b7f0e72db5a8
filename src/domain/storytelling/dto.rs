use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub topic: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryOut {
    pub topic: String,
    pub language: String,
    pub title: String,
    pub story: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub original: String,
    pub student: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrectionOut {
    pub original: String,
    pub corrected: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationOut {
    pub score: u8,
    pub feedback: String,
    pub corrections: Vec<CorrectionOut>,
}
