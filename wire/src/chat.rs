//! `POST /chat/{videoId}` bodies.

use serde::{Deserialize, Serialize};

/// Question about one analysed video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub video_id: Option<String>,
}

/// Assistant reply grounded in the analysis results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    /// 0..1 confidence reported by the backend.
    pub confidence: f64,
    /// `m:ss` offset the reply refers to, when it points at a specific moment.
    #[serde(default)]
    pub related_timestamp: Option<String>,
}
