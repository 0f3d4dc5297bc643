//! Live capture session state and its reducer.
//!
//! STATE MACHINE
//! =============
//! `Idle -> Connecting` on start; `Connecting -> Running` when the socket
//! opens; `Connecting -> Idle` (with an error) when the camera is refused or
//! the socket fails; `Running -> Stopped` on user stop or socket close;
//! `Stopped -> Connecting` on restart. Events that do not apply to the
//! current status leave the state untouched.
//!
//! Inbound analysis frames are applied in arrival order, except that a frame
//! whose server index is lower than the last applied index is discarded as
//! stale.

use std::collections::BTreeMap;

use wire::{AnalysisFrame, CameraSaveRequest, Severity};

use crate::CaptureError;
use crate::events::EventTracker;
use crate::history::RiskHistory;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureStatus {
    #[default]
    Idle,
    Connecting,
    Running,
    Stopped,
}

impl CaptureStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

/// Inputs to [`CaptureSession::reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureEvent {
    /// User pressed start (or restart).
    StartRequested,
    /// Camera acquisition or socket open failed.
    Failed(CaptureError),
    ChannelOpened,
    SessionStarted { session_id: String },
    Analysis(AnalysisFrame),
    /// User pressed stop.
    StopRequested,
    /// Socket closed without a user stop.
    ChannelClosed,
}

/// One live monitoring run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureSession {
    pub status: CaptureStatus,
    /// Generation of the current run, bumped on every accepted start. Async
    /// work started for an older run compares against it and bails out.
    pub run: u64,
    /// Backend-assigned id, present once `session_start` arrives.
    pub session_id: Option<String>,
    /// Analysis frames applied this run.
    pub frame_count: u64,
    /// Seconds since the backend started the session.
    pub elapsed: f64,
    pub current_risk: u32,
    pub severity: Severity,
    pub breakdown: BTreeMap<String, u32>,
    pub avg_risk: f64,
    pub peak_risk: u32,
    pub fps: f64,
    pub risk_history: RiskHistory,
    /// Latest annotated frame (base64 JPEG); older frames are not retained.
    pub annotated_frame: Option<String>,
    /// User-visible reason the last start attempt failed.
    pub error: Option<String>,
    pub last_frame_index: Option<u64>,
    /// Every applied risk value, for `/camera/save`.
    pub timeline: Vec<u32>,
    pub events: EventTracker,
    /// Analysis frames discarded for arriving out of order.
    pub stale_dropped: u64,
}

impl CaptureSession {
    /// Whether a new run may begin from the current status.
    #[must_use]
    pub fn can_start(&self) -> bool {
        matches!(self.status, CaptureStatus::Idle | CaptureStatus::Stopped)
    }

    /// Frames are only sampled while running.
    #[must_use]
    pub fn is_sampling_allowed(&self) -> bool {
        self.status == CaptureStatus::Running
    }

    /// Whether `run` is still the run being connected.
    #[must_use]
    pub fn is_connecting_run(&self, run: u64) -> bool {
        self.run == run && self.status == CaptureStatus::Connecting
    }

    /// Whether the camera and socket should currently be held.
    #[must_use]
    pub fn holds_resources(&self) -> bool {
        matches!(self.status, CaptureStatus::Connecting | CaptureStatus::Running)
    }

    /// Apply one event, producing the next state.
    #[must_use]
    pub fn reduce(self, event: &CaptureEvent) -> Self {
        use CaptureStatus::{Connecting, Idle, Running, Stopped};

        match (self.status, event) {
            (Idle | Stopped, CaptureEvent::StartRequested) => {
                Self { status: Connecting, run: self.run + 1, ..Self::default() }
            }
            (Connecting, CaptureEvent::Failed(err)) => {
                Self { status: Idle, session_id: None, error: Some(err.to_string()), ..self }
            }
            (Connecting, CaptureEvent::ChannelOpened) => Self { status: Running, ..self },
            (Connecting | Running, CaptureEvent::SessionStarted { session_id }) => {
                Self { session_id: Some(session_id.clone()), ..self }
            }
            (Running, CaptureEvent::Analysis(frame)) => self.apply_analysis(frame),
            (Running, CaptureEvent::StopRequested | CaptureEvent::ChannelClosed) => Self { status: Stopped, ..self },
            (Connecting, CaptureEvent::StopRequested | CaptureEvent::ChannelClosed) => {
                Self { status: Idle, session_id: None, ..self }
            }
            _ => self,
        }
    }

    fn apply_analysis(mut self, frame: &AnalysisFrame) -> Self {
        if self.last_frame_index.is_some_and(|last| frame.frame < last) {
            self.stale_dropped += 1;
            return self;
        }

        self.last_frame_index = Some(frame.frame);
        self.frame_count += 1;
        self.elapsed = frame.elapsed;
        self.current_risk = frame.risk;
        self.severity = frame.severity;
        self.breakdown.clone_from(&frame.breakdown);
        self.avg_risk = frame.avg_risk;
        self.peak_risk = frame.peak_risk.max(self.peak_risk);
        self.fps = frame.fps;
        self.risk_history.push(frame.risk);
        self.timeline.push(frame.risk);
        self.events.observe(frame);
        if !frame.annotated_frame.is_empty() {
            self.annotated_frame = Some(frame.annotated_frame.clone());
        }
        self
    }

    /// Body for `POST /camera/save`, available once a run has stopped with data.
    #[must_use]
    pub fn save_request(&self) -> Option<CameraSaveRequest> {
        if self.status != CaptureStatus::Stopped || self.timeline.is_empty() {
            return None;
        }
        let session_id = self.session_id.clone()?;
        Some(CameraSaveRequest {
            session_id,
            risk_timeline: self.timeline.clone(),
            events: self.events.events().to_vec(),
            avg_risk: self.avg_risk,
            peak_risk: self.peak_risk,
            elapsed: self.elapsed,
            frame_count: self.frame_count,
        })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
