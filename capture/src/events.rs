//! Live risk event aggregation.
//!
//! A live run has no per-factor analysis on the client, so events are derived
//! from the composite risk: crossing [`EVENT_THRESHOLD`] opens an event, the
//! open event follows the peak, and dropping below the threshold closes it.

use wire::{AnalysisFrame, RiskEvent, Severity};

/// Composite risk at or above which a live event is recorded.
pub const EVENT_THRESHOLD: u32 = 60;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventTracker {
    events: Vec<RiskEvent>,
    open: Option<usize>,
}

impl EventTracker {
    /// Fold one analysis frame into the event list.
    pub fn observe(&mut self, frame: &AnalysisFrame) {
        if frame.risk < EVENT_THRESHOLD {
            self.open = None;
            return;
        }

        match self.open.and_then(|idx| self.events.get_mut(idx)) {
            Some(event) => {
                if frame.risk > event.risk {
                    *event = event_from_frame(frame);
                }
            }
            None => {
                self.events.push(event_from_frame(frame));
                self.open = Some(self.events.len() - 1);
            }
        }
    }

    #[must_use]
    pub fn events(&self) -> &[RiskEvent] {
        &self.events
    }

    /// True while the latest frame is still above the threshold.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.open = None;
    }
}

fn event_from_frame(frame: &AnalysisFrame) -> RiskEvent {
    let part = frame
        .dominant_zone()
        .map_or_else(|| "overall".to_owned(), |(zone, _)| zone.to_owned());
    RiskEvent {
        timestamp: format_timestamp(frame.elapsed),
        frame: frame.frame,
        risk: frame.risk,
        description: format!("{} risk peaked at {}%", part.replace('_', " "), frame.risk),
        part,
        severity: Severity::from_score(frame.risk),
        angle: None,
    }
}

/// Format seconds as `m:ss`, flooring fractions and clamping negatives to zero.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if seconds.is_finite() { seconds.max(0.0).floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
