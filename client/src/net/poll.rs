//! Analysis polling task.
//!
//! Polls `GET /analysis/{videoId}` every [`capture::POLL_INTERVAL_MS`] until a
//! terminal status or the attempt cap. Fetch failures count as "not ready
//! yet". The loop exits as soon as the owning view is cleaned up.

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::analysis::AnalysisState;
#[cfg(feature = "hydrate")]
use crate::util::config::ApiConfig;

/// Spawn the polling loop for the video currently held in `state`.
///
/// `alive` is cleared by the page's cleanup; the loop checks it before and
/// after each request so a late response never touches a disposed view.
#[cfg(feature = "hydrate")]
pub fn spawn_analysis_poll(api: ApiConfig, state: RwSignal<AnalysisState>, alive: Arc<AtomicBool>) {
    use capture::{PollPolicy, PollTracker, classify};

    let Some((video_id, sport)) = state.try_with_untracked(|s| (s.video_id.clone(), s.sport.clone())) else {
        return;
    };

    leptos::task::spawn_local(async move {
        let mut tracker = PollTracker::new(PollPolicy::default());
        let interval = std::time::Duration::from_millis(u64::from(tracker.policy().interval_ms));
        loop {
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let response = match crate::net::api::fetch_analysis(&api, &video_id, &sport).await {
                Ok(response) => Some(response),
                Err(e) => {
                    leptos::logging::log!("analysis {video_id} not ready: {e}");
                    None
                }
            };
            if !alive.load(Ordering::Relaxed) {
                break;
            }

            let outcome = tracker.record(classify(response.as_ref()));
            let terminal = outcome.is_terminal();
            if terminal {
                leptos::logging::log!("analysis {video_id} finished after {} polls: {outcome:?}", tracker.attempts());
            }
            if state.try_update(|s| s.apply_poll(outcome, response)).is_none() || terminal {
                break;
            }
            gloo_timers::future::sleep(interval).await;
        }
    });
}
