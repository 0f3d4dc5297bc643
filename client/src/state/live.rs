//! Live capture page state: the capture session plus the save-to-backend flow.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use capture::{CaptureEvent, CaptureSession};
use wire::CameraSaveRequest;

/// Progress of persisting a stopped session via `/camera/save`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    /// Backend id the session was stored under.
    Saved(String),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiveState {
    pub session: CaptureSession,
    pub save: SaveStatus,
}

impl LiveState {
    /// Feed one event through the session reducer.
    pub fn dispatch(&mut self, event: &CaptureEvent) {
        let before = self.session.status;
        self.session = std::mem::take(&mut self.session).reduce(event);
        if self.session.status != before && matches!(event, CaptureEvent::StartRequested) {
            self.save = SaveStatus::Idle;
        }
    }

    /// Feed an event produced by async work for `run`. Events from a run that
    /// has since been superseded are ignored; returns whether it was applied.
    pub fn dispatch_for(&mut self, run: u64, event: &CaptureEvent) -> bool {
        if self.session.run != run {
            return false;
        }
        self.dispatch(event);
        true
    }

    /// Claim the save request, moving to `Saving`. `None` when there is nothing
    /// to save or a save is already in flight or done.
    pub fn begin_save(&mut self) -> Option<CameraSaveRequest> {
        if matches!(self.save, SaveStatus::Saving | SaveStatus::Saved(_)) {
            return None;
        }
        let request = self.session.save_request()?;
        self.save = SaveStatus::Saving;
        Some(request)
    }

    pub fn finish_save(&mut self, result: Result<String, String>) {
        if self.save != SaveStatus::Saving {
            return;
        }
        self.save = match result {
            Ok(video_id) => SaveStatus::Saved(video_id),
            Err(message) => SaveStatus::Failed(message),
        };
    }

    pub fn can_save(&self) -> bool {
        !matches!(self.save, SaveStatus::Saving | SaveStatus::Saved(_)) && self.session.save_request().is_some()
    }
}
