use serde::{Deserialize, Serialize};

/// Success wrapper: `{"status": "ok", "data": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Acknowledgement without a payload
    pub fn ack() -> Self {
        Self {
            status: "ok".to_string(),
            data: None,
        }
    }
}
