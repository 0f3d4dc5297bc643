//! Shared wire models for the PoseGuard analysis backend.
//!
//! This crate owns the JSON representation of every backend contract the
//! client consumes: the REST bodies (upload, analysis, chat, players, camera
//! save) and the `/ws/camera` message protocol. It performs no I/O so both
//! the `capture` logic crate and the Leptos `client` can depend on it.

pub mod analysis;
pub mod camera;
pub mod chat;
pub mod player;
pub mod severity;

pub use analysis::{AnalysisResponse, AnalysisStatus, Keypoint, POSE_SAMPLE_STRIDE, RiskEvent, UploadResponse};
pub use camera::{
    AnalysisFrame, CameraSaveRequest, CameraSaveResponse, ClientMessage, ServerMessage, decode_server_message,
    encode_client_message,
};
pub use chat::{ChatRequest, ChatResponse};
pub use player::{Drill, InjuryZone, PastMatch, PlayerProfile, RiskPoint, Trend};
pub use severity::Severity;

/// Error returned when a socket message cannot be encoded or decoded.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload was not valid JSON or did not match any known message shape.
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload was valid JSON but carried no `type` discriminator.
    #[error("message is missing a type tag")]
    MissingType,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
