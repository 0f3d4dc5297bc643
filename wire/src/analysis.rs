//! Upload and offline video analysis payloads.
//!
//! `GET /analysis/{videoId}` returns the same envelope while processing,
//! on failure, and when done; only the `done` variant fills the result fields,
//! so every result field defaults when absent.

use serde::{Deserialize, Serialize};

use crate::Severity;

/// Pose keypoints are sampled on every tenth processed frame (frames 1, 11, 21, ...).
pub const POSE_SAMPLE_STRIDE: u64 = 10;

/// Response body of `POST /upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub video_id: String,
    pub filename: String,
    pub status: String,
}

/// Lifecycle status of a background analysis job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Processing,
    Done,
    Error,
    /// Any status string this client does not recognise; treated as still pending.
    #[serde(other)]
    Unknown,
}

/// Body of `GET /analysis/{videoId}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResponse {
    pub status: AnalysisStatus,
    pub video_id: String,
    /// Failure reason when `status` is `error`.
    pub error: Option<String>,
    pub sport: Option<String>,
    pub player_name: Option<String>,
    pub overall_risk: u32,
    pub overall_severity: Severity,
    /// Human readable duration, e.g. `"1:07"`.
    pub duration: Option<String>,
    pub fps: u32,
    /// Peak-risk events, at most twenty, ordered by the backend.
    pub risks: Vec<RiskEvent>,
    #[serde(rename = "pose_keypoints")]
    pub pose_keypoints: Vec<Vec<Keypoint>>,
    pub suggestions: Vec<String>,
    /// One composite risk score per processed frame.
    pub risk_timeline: Vec<u32>,
    /// Path (relative to the backend base URL) of the rendered annotated video.
    pub annotated_video_url: Option<String>,
    pub total_frames: u64,
    pub peak_risk: u32,
}

impl AnalysisResponse {
    /// Sampled pose for the given 1-based frame, using the nearest earlier sample.
    #[must_use]
    pub fn pose_for_frame(&self, frame: u64) -> Option<&[Keypoint]> {
        if self.pose_keypoints.is_empty() {
            return None;
        }
        let idx = usize::try_from(frame.saturating_sub(1) / POSE_SAMPLE_STRIDE).unwrap_or(usize::MAX);
        let idx = idx.min(self.pose_keypoints.len() - 1);
        self.pose_keypoints.get(idx).map(Vec::as_slice)
    }
}

/// A detected injury-risk event keyed to a video frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    /// `m:ss` offset into the video.
    pub timestamp: String,
    pub frame: u64,
    pub risk: u32,
    /// Body part key, e.g. `"knee"` or `"lower_back"`.
    pub part: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    /// Joint angle at the peak, in degrees, when the factor is angle based.
    #[serde(default)]
    pub angle: Option<f64>,
}

/// One normalized (0..1) keypoint of a sampled pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub confidence: f64,
    pub name: String,
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
