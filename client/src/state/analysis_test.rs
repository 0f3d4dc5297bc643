use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use wire::{AnalysisStatus, Severity};

use super::*;

fn event(frame: u64, timestamp: &str) -> RiskEvent {
    RiskEvent {
        timestamp: timestamp.to_owned(),
        frame,
        risk: 70,
        part: "knee".to_owned(),
        severity: Severity::High,
        description: String::new(),
        angle: None,
    }
}

fn done() -> AnalysisResponse {
    AnalysisResponse {
        status: AnalysisStatus::Done,
        video_id: "v1".to_owned(),
        fps: 10,
        total_frames: 40,
        risk_timeline: (0..40).collect(),
        risks: vec![event(21, "0:02"), event(0, "0:03")],
        pose_keypoints: vec![
            vec![Keypoint { x: 0.1, y: 0.1, confidence: 0.9, name: "nose".to_owned() }],
            vec![Keypoint { x: 0.2, y: 0.1, confidence: 0.9, name: "nose".to_owned() }],
        ],
        ..AnalysisResponse::default()
    }
}

fn ready() -> AnalysisState {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::Done, Some(done()));
    state
}

// =============================================================
// Polling
// =============================================================

#[test]
fn pending_polls_stay_loading() {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::Continue, None);
    state.apply_poll(PollOutcome::Continue, None);
    assert_eq!(state.view, AnalysisView::Loading);
    assert_eq!(state.attempts, 2);
}

#[test]
fn done_populates_exactly_once() {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::Continue, None);
    state.apply_poll(PollOutcome::Done, Some(done()));
    assert!(state.result().is_some());

    let mut other = done();
    other.overall_risk = 99;
    state.apply_poll(PollOutcome::Done, Some(other));
    assert_eq!(state.result().map(|r| r.overall_risk), Some(0));
}

#[test]
fn error_outcome_fails_view() {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::Error("Could not open video file".to_owned()), None);
    assert_eq!(state.view, AnalysisView::Failed("Could not open video file".to_owned()));
}

#[test]
fn gave_up_times_out() {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::GaveUp, None);
    assert_eq!(state.view, AnalysisView::TimedOut);
}

#[test]
fn stopped_outcome_is_not_counted() {
    let mut state = AnalysisState::new("v1", "general");
    state.apply_poll(PollOutcome::Stopped, None);
    assert_eq!(state.attempts, 0);
}

// =============================================================
// Playhead and seeking
// =============================================================

#[test]
fn seek_requests_increment_sequence() {
    let mut state = ready();
    state.seek_to(1.5);
    state.seek_to(1.5);
    assert_eq!(state.seek, Some(SeekRequest { seq: 2, seconds: 1.5 }));
    assert_eq!(state.playhead, 1.5);
}

#[test]
fn seek_ignores_non_finite_targets() {
    let mut state = ready();
    state.seek_to(f64::NAN);
    assert!(state.seek.is_none());
}

#[test]
fn duration_falls_back_to_frame_count() {
    let mut state = ready();
    assert_eq!(state.duration(), 4.0);
    state.set_media_duration(3.5);
    assert_eq!(state.duration(), 3.5);
    state.set_media_duration(f64::INFINITY);
    assert_eq!(state.duration(), 4.0);
}

#[test]
fn seek_fraction_scales_by_duration() {
    let mut state = ready();
    state.seek_fraction(0.5);
    assert_eq!(state.seek.map(|s| s.seconds), Some(2.0));
}

#[test]
fn select_event_prefers_frame_index() {
    let mut state = ready();
    state.select_event(0);
    assert_eq!(state.selected_event, Some(0));
    assert_eq!(state.seek.map(|s| s.seconds), Some(2.0));

    state.select_event(1);
    assert_eq!(state.seek.map(|s| s.seconds), Some(3.0));
}

#[test]
fn select_missing_event_is_ignored() {
    let mut state = ready();
    state.select_event(9);
    assert!(state.selected_event.is_none());
    assert!(state.seek.is_none());
}

#[test]
fn seek_timestamp_parses_chat_reference() {
    let mut state = ready();
    assert!(state.seek_timestamp("0:03"));
    assert_eq!(state.playhead, 3.0);
    assert!(!state.seek_timestamp("soon"));
}

#[test]
fn playhead_drives_risk_and_pose() {
    let mut state = ready();
    state.set_playhead(1.05);
    assert_eq!(state.current_frame(), 11);
    assert_eq!(state.current_risk(), Some(10));
    assert_eq!(state.current_pose().map(|p| p[0].x), Some(0.2));
}

#[test]
fn loading_state_has_no_pose_or_risk() {
    let state = AnalysisState::new("v1", "general");
    assert!(state.current_pose().is_none());
    assert!(state.current_risk().is_none());
    assert_eq!(state.duration(), 0.0);
}

// =============================================================
// Reactivity
// =============================================================

#[test]
fn phase_ignores_playback_fields() {
    let mut state = ready();
    assert_eq!(state.phase(), AnalysisPhase::Ready);
    state.seek_to(1.5);
    state.set_playhead(2.0);
    assert_eq!(state.phase(), AnalysisPhase::Ready);

    let mut failed = AnalysisState::new("v1", "general");
    failed.apply_poll(PollOutcome::Error("bad codec".to_owned()), None);
    assert_eq!(failed.phase(), AnalysisPhase::Failed("bad codec".to_owned()));
}

#[test]
fn playhead_writes_do_not_rerun_phase_view() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(AnalysisState::new("v1", "general"));
        let phase = Memo::new(move |_| state.with(AnalysisState::phase));
        let renders = Arc::new(AtomicUsize::new(0));
        let body = Memo::new({
            let renders = renders.clone();
            move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                phase.get()
            }
        });

        assert_eq!(body.get(), AnalysisPhase::Loading);
        state.update(|s| s.apply_poll(PollOutcome::Done, Some(done())));
        assert_eq!(body.get(), AnalysisPhase::Ready);

        state.update(|s| s.seek_to(1.5));
        for seconds in [1.6, 1.8, 2.0, 2.2] {
            state.update(|s| s.set_playhead(seconds));
            assert_eq!(body.get(), AnalysisPhase::Ready);
        }
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn seek_request_is_stable_across_playhead_writes() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ready());
        let seek = Memo::new(move |_| state.with(|s| s.seek));
        let fired = Arc::new(AtomicUsize::new(0));
        let applied = Memo::new({
            let fired = fired.clone();
            move |_| {
                fired.fetch_add(1, Ordering::SeqCst);
                seek.get().map(|k| k.seq)
            }
        });

        state.update(|s| s.seek_to(1.5));
        let first = applied.get();
        assert!(first.is_some());
        state.update(|s| s.set_playhead(1.7));
        state.update(|s| s.set_playhead(1.9));
        assert_eq!(applied.get(), first);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        state.update(|s| s.seek_to(1.5));
        assert_ne!(applied.get(), first);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    });
}
