//! `/ws/camera` live streaming protocol and the `/camera/save` bodies.
//!
//! Every socket message is a JSON text frame discriminated by a `type` field.
//! Client -> server: `frame` (base64 JPEG) and `stop`. Server -> client:
//! `session_start` once after open, then one `analysis` per processed frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{RiskEvent, Severity, WireError};

/// Message sent by the browser over the camera socket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One sampled camera frame, base64 JPEG without the `data:` prefix.
    Frame { data: String },
    /// Best-effort end-of-session notice; closing the socket is authoritative.
    Stop,
}

/// Message received from the backend over the camera socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    SessionStart {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    Analysis(AnalysisFrame),
    Error {
        #[serde(default)]
        message: String,
    },
    #[serde(other)]
    Unknown,
}

/// Backend result for one transmitted frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisFrame {
    /// Server-side frame index, monotonically increasing within a session.
    pub frame: u64,
    pub risk: u32,
    pub severity: Severity,
    /// Body zone label -> 0-100 risk.
    pub breakdown: BTreeMap<String, u32>,
    pub avg_risk: f64,
    pub peak_risk: u32,
    /// Processing rate measured by the backend.
    pub fps: f64,
    /// Seconds since the session started.
    pub elapsed: f64,
    /// Annotated frame as base64 JPEG.
    pub annotated_frame: String,
}

impl AnalysisFrame {
    /// Zone with the highest breakdown risk, ties broken by name order.
    #[must_use]
    pub fn dominant_zone(&self) -> Option<(&str, u32)> {
        self.breakdown
            .iter()
            .fold(None, |best: Option<(&str, u32)>, (zone, risk)| match best {
                Some((_, top)) if top >= *risk => best,
                _ => Some((zone.as_str(), *risk)),
            })
    }
}

/// Body of `POST /camera/save` for a completed live session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSaveRequest {
    pub session_id: String,
    pub risk_timeline: Vec<u32>,
    pub events: Vec<RiskEvent>,
    pub avg_risk: f64,
    pub peak_risk: u32,
    pub elapsed: f64,
    pub frame_count: u64,
}

/// Response of `POST /camera/save`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSaveResponse {
    pub status: String,
    pub video_id: String,
}

/// Encode a client message as a JSON text frame.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_client_message(message: &ClientMessage) -> Result<String, WireError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode a JSON text frame received from the backend.
///
/// # Errors
///
/// Returns [`WireError::MissingType`] when the object has no `type` field and
/// [`WireError::Json`] for malformed JSON or a known type with a bad body.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, WireError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.get("type").and_then(serde_json::Value::as_str).is_none() {
        return Err(WireError::MissingType);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod tests;
