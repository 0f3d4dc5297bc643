//! Live capture session logic for the PoseGuard client.
//!
//! This crate is UI-framework agnostic: it models the capture lifecycle as a
//! reducer over an owned state record, plus the sampling gate, live event
//! aggregation and analysis polling policy. The Leptos client drives these
//! from browser callbacks; tests drive them directly.

pub mod events;
pub mod history;
pub mod poll;
pub mod sampler;
pub mod session;

pub use events::{EVENT_THRESHOLD, EventTracker, format_timestamp};
pub use history::{RISK_HISTORY_CAP, RiskHistory};
pub use poll::{POLL_INTERVAL_MS, PollOutcome, PollPolicy, PollStep, PollTracker, classify};
pub use sampler::{
    FRAME_HEIGHT, FRAME_MIME, FRAME_WIDTH, JPEG_QUALITY, SAMPLE_INTERVAL_MS, SamplerGate, TickConditions, TickOutcome,
    strip_data_url,
};
pub use session::{CaptureEvent, CaptureSession, CaptureStatus};

/// User-visible reason a capture run could not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The browser or user refused camera access.
    #[error("Camera access denied: {0}")]
    PermissionDenied(String),
    /// The analysis socket could not be opened.
    #[error("Could not connect to the analysis server: {0}")]
    ChannelOpen(String),
    /// No `mediaDevices` API is available in this context.
    #[error("This browser does not support camera capture")]
    Unsupported,
}
