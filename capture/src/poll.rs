//! Bounded polling for background video analysis.
//!
//! `GET /analysis/{id}` is polled on a fixed interval until the job reports
//! `done` or `error`. Fetch misses (network errors, 404 before the job is
//! registered) count as pending. The attempt cap turns a hung job into a
//! terminal outcome instead of an endless background loop.

use wire::{AnalysisResponse, AnalysisStatus};

pub const POLL_INTERVAL_MS: u32 = 2_000;
/// Fifteen minutes at the default interval.
pub const MAX_POLL_ATTEMPTS: u32 = 450;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval_ms: POLL_INTERVAL_MS, max_attempts: MAX_POLL_ATTEMPTS }
    }
}

/// Classification of a single poll attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollStep {
    Pending,
    Ready,
    Failed(String),
}

/// Classify one fetch result; `None` is a fetch miss.
#[must_use]
pub fn classify(response: Option<&AnalysisResponse>) -> PollStep {
    match response.map(|r| (r.status, r.error.as_deref())) {
        Some((AnalysisStatus::Done, _)) => PollStep::Ready,
        Some((AnalysisStatus::Error, reason)) => {
            PollStep::Failed(reason.filter(|r| !r.is_empty()).unwrap_or("Analysis failed").to_owned())
        }
        Some((AnalysisStatus::Processing | AnalysisStatus::Unknown, _)) | None => PollStep::Pending,
    }
}

/// What the polling loop does next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Sleep one interval and poll again.
    Continue,
    Done,
    Error(String),
    /// The attempt cap was reached without a terminal status.
    GaveUp,
    /// A terminal outcome was already reported; the loop must exit.
    Stopped,
}

impl PollOutcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollTracker {
    policy: PollPolicy,
    attempts: u32,
    finished: bool,
}

impl PollTracker {
    #[must_use]
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy, attempts: 0, finished: false }
    }

    /// Record one attempt and decide what happens next.
    pub fn record(&mut self, step: PollStep) -> PollOutcome {
        if self.finished {
            return PollOutcome::Stopped;
        }
        self.attempts += 1;
        let outcome = match step {
            PollStep::Ready => PollOutcome::Done,
            PollStep::Failed(reason) => PollOutcome::Error(reason),
            PollStep::Pending if self.attempts >= self.policy.max_attempts => PollOutcome::GaveUp,
            PollStep::Pending => PollOutcome::Continue,
        };
        self.finished = outcome.is_terminal();
        outcome
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn policy(&self) -> PollPolicy {
        self.policy
    }
}

#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;
