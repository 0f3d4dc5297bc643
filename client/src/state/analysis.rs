//! Analysis viewer state: polling result, playhead, and seek requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poll task feeds `apply_poll`; the video element reports its clock via
//! `set_playhead`; charts, the event list, and chat timestamps request jumps
//! through `seek_to`, which the video element consumes by sequence number.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use capture::PollOutcome;
use wire::{AnalysisResponse, Keypoint, RiskEvent};

use crate::util::timeline;

/// What the analysis page currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisView {
    #[default]
    Loading,
    Ready(Box<AnalysisResponse>),
    /// Backend reported an error for this video.
    Failed(String),
    /// Polling exhausted its attempt budget without a result.
    TimedOut,
}

/// Which screen the page shows, without the result payload. Playhead and seek
/// writes never change it, so views keyed on it are not rebuilt during playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisPhase {
    Loading,
    Ready,
    Failed(String),
    TimedOut,
}

/// A pending jump of the video clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekRequest {
    /// Increments per request so repeated jumps to the same time still fire.
    pub seq: u64,
    pub seconds: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    pub video_id: String,
    pub sport: String,
    pub view: AnalysisView,
    /// Poll requests made so far.
    pub attempts: u32,
    /// Current video time in seconds.
    pub playhead: f64,
    /// Video duration reported by the media element, when known.
    pub media_duration: Option<f64>,
    pub seek: Option<SeekRequest>,
    /// Index into `risks` of the highlighted event.
    pub selected_event: Option<usize>,
}

impl AnalysisState {
    pub fn new(video_id: &str, sport: &str) -> Self {
        Self { video_id: video_id.to_owned(), sport: sport.to_owned(), ..Self::default() }
    }

    /// Apply one polling outcome. The view leaves `Loading` at most once.
    pub fn apply_poll(&mut self, outcome: PollOutcome, response: Option<AnalysisResponse>) {
        if outcome != PollOutcome::Stopped {
            self.attempts += 1;
        }
        if self.view != AnalysisView::Loading {
            return;
        }
        match outcome {
            PollOutcome::Done => {
                if let Some(response) = response {
                    self.view = AnalysisView::Ready(Box::new(response));
                }
            }
            PollOutcome::Error(message) => self.view = AnalysisView::Failed(message),
            PollOutcome::GaveUp => self.view = AnalysisView::TimedOut,
            PollOutcome::Continue | PollOutcome::Stopped => {}
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        match &self.view {
            AnalysisView::Loading => AnalysisPhase::Loading,
            AnalysisView::Ready(_) => AnalysisPhase::Ready,
            AnalysisView::Failed(reason) => AnalysisPhase::Failed(reason.clone()),
            AnalysisView::TimedOut => AnalysisPhase::TimedOut,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResponse> {
        match &self.view {
            AnalysisView::Ready(response) => Some(response),
            _ => None,
        }
    }

    pub fn set_playhead(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.playhead = seconds.max(0.0);
        }
    }

    pub fn set_media_duration(&mut self, seconds: f64) {
        self.media_duration = (seconds.is_finite() && seconds > 0.0).then_some(seconds);
    }

    /// Length of the analysed clip: the media element's view when known,
    /// otherwise derived from the frame count.
    pub fn duration(&self) -> f64 {
        if let Some(seconds) = self.media_duration {
            return seconds;
        }
        self.result().map_or(0.0, |r| {
            let frames = r.total_frames.max(u64::try_from(r.risk_timeline.len()).unwrap_or(u64::MAX));
            timeline::time_of_frame(frames + 1, r.fps)
        })
    }

    /// Request the video jump to `seconds`.
    pub fn seek_to(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let seconds = seconds.max(0.0);
        let seq = self.seek.map_or(1, |s| s.seq + 1);
        self.seek = Some(SeekRequest { seq, seconds });
        self.playhead = seconds;
    }

    /// Jump to a position along the timeline chart (0..=1).
    pub fn seek_fraction(&mut self, fraction: f64) {
        let duration = self.duration();
        if duration > 0.0 {
            self.seek_to(fraction.clamp(0.0, 1.0) * duration);
        }
    }

    /// Highlight an event and jump to it.
    pub fn select_event(&mut self, index: usize) {
        let Some(seconds) = self.result().and_then(|r| r.risks.get(index)).map(|e| self.event_time(e)) else {
            return;
        };
        self.selected_event = Some(index);
        self.seek_to(seconds);
    }

    /// Jump to an `m:ss` offset referenced by a chat reply.
    pub fn seek_timestamp(&mut self, timestamp: &str) -> bool {
        match timeline::parse_timestamp(timestamp) {
            Some(seconds) => {
                self.seek_to(seconds);
                true
            }
            None => false,
        }
    }

    /// Start time of an event, preferring its frame index.
    pub fn event_time(&self, event: &RiskEvent) -> f64 {
        let fps = self.result().map_or(0, |r| r.fps);
        if fps > 0 && event.frame > 0 {
            return timeline::time_of_frame(event.frame, fps);
        }
        timeline::parse_timestamp(&event.timestamp).unwrap_or(0.0)
    }

    /// 1-based frame under the playhead.
    pub fn current_frame(&self) -> u64 {
        timeline::frame_at(self.playhead, self.result().map_or(0, |r| r.fps))
    }

    pub fn current_risk(&self) -> Option<u32> {
        let result = self.result()?;
        timeline::risk_at(&result.risk_timeline, self.playhead, result.fps)
    }

    /// Sampled pose nearest to (not after) the playhead.
    pub fn current_pose(&self) -> Option<&[Keypoint]> {
        self.result()?.pose_for_frame(self.current_frame())
    }
}
