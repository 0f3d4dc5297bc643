use super::*;
use crate::RISK_HISTORY_CAP;

fn analysis(index: u64, risk: u32) -> AnalysisFrame {
    let mut frame = AnalysisFrame {
        frame: index,
        risk,
        severity: Severity::from_score(risk),
        avg_risk: f64::from(risk) / 2.0,
        peak_risk: risk,
        fps: 7.5,
        elapsed: f64::from(u32::try_from(index).unwrap_or(0)) * 0.125,
        annotated_frame: format!("img-{index}"),
        ..AnalysisFrame::default()
    };
    frame.breakdown.insert("knee".to_owned(), risk);
    frame
}

fn run(events: &[CaptureEvent]) -> (CaptureSession, Vec<CaptureStatus>) {
    let mut state = CaptureSession::default();
    let mut statuses = vec![state.status];
    for event in events {
        state = state.reduce(event);
        if statuses.last() != Some(&state.status) {
            statuses.push(state.status);
        }
    }
    (state, statuses)
}

fn running() -> CaptureSession {
    run(&[
        CaptureEvent::StartRequested,
        CaptureEvent::ChannelOpened,
        CaptureEvent::SessionStarted { session_id: "s-1".to_owned() },
    ])
    .0
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn grant_and_open_goes_idle_connecting_running() {
    let (state, statuses) = run(&[CaptureEvent::StartRequested, CaptureEvent::ChannelOpened]);
    assert_eq!(statuses, vec![CaptureStatus::Idle, CaptureStatus::Connecting, CaptureStatus::Running]);
    assert!(state.is_sampling_allowed());
    assert!(state.error.is_none());
}

#[test]
fn permission_denied_returns_to_idle_with_error() {
    let (state, statuses) = run(&[
        CaptureEvent::StartRequested,
        CaptureEvent::Failed(CaptureError::PermissionDenied("NotAllowedError".to_owned())),
    ]);
    assert_eq!(statuses, vec![CaptureStatus::Idle, CaptureStatus::Connecting, CaptureStatus::Idle]);
    assert_eq!(state.error.as_deref(), Some("Camera access denied: NotAllowedError"));
    assert!(state.can_start());
}

#[test]
fn channel_open_failure_returns_to_idle_with_error() {
    let (state, _) = run(&[
        CaptureEvent::StartRequested,
        CaptureEvent::Failed(CaptureError::ChannelOpen("refused".to_owned())),
    ]);
    assert_eq!(state.status, CaptureStatus::Idle);
    assert!(state.error.as_deref().is_some_and(|e| e.contains("refused")));
}

#[test]
fn retry_after_failure_clears_error() {
    let (state, _) = run(&[
        CaptureEvent::StartRequested,
        CaptureEvent::Failed(CaptureError::Unsupported),
        CaptureEvent::StartRequested,
    ]);
    assert_eq!(state.status, CaptureStatus::Connecting);
    assert!(state.error.is_none());
}

#[test]
fn user_stop_moves_running_to_stopped() {
    let state = running().reduce(&CaptureEvent::StopRequested);
    assert_eq!(state.status, CaptureStatus::Stopped);
    assert_eq!(state.session_id.as_deref(), Some("s-1"));
    assert!(!state.is_sampling_allowed());
}

#[test]
fn unexpected_close_is_a_normal_stop() {
    let state = running().reduce(&CaptureEvent::ChannelClosed);
    assert_eq!(state.status, CaptureStatus::Stopped);
    assert!(state.error.is_none());
}

#[test]
fn stop_is_idempotent() {
    let once = running().reduce(&CaptureEvent::StopRequested);
    let twice = once.clone().reduce(&CaptureEvent::StopRequested).reduce(&CaptureEvent::ChannelClosed);
    assert_eq!(once, twice);

    let idle = CaptureSession::default().reduce(&CaptureEvent::StopRequested);
    assert_eq!(idle, CaptureSession::default());
}

#[test]
fn stop_while_connecting_aborts_to_idle() {
    let (state, _) = run(&[CaptureEvent::StartRequested, CaptureEvent::StopRequested]);
    assert_eq!(state.status, CaptureStatus::Idle);
    assert!(state.error.is_none());
}

#[test]
fn start_is_ignored_while_active() {
    let before = running();
    let after = before.clone().reduce(&CaptureEvent::StartRequested);
    assert_eq!(before, after);
}

#[test]
fn channel_opened_is_ignored_outside_connecting() {
    let state = CaptureSession::default().reduce(&CaptureEvent::ChannelOpened);
    assert_eq!(state.status, CaptureStatus::Idle);
}

#[test]
fn restart_from_stopped_resets_everything() {
    let mut state = running();
    for i in 0..5 {
        state = state.reduce(&CaptureEvent::Analysis(analysis(i, 90)));
    }
    let state = state.reduce(&CaptureEvent::StopRequested).reduce(&CaptureEvent::StartRequested);
    assert_eq!(state, CaptureSession { status: CaptureStatus::Connecting, run: 2, ..CaptureSession::default() });
    assert_eq!(state.frame_count, 0);
    assert!(state.risk_history.is_empty());
    assert!(state.session_id.is_none());
    assert!(state.annotated_frame.is_none());
}

#[test]
fn each_accepted_start_bumps_run() {
    let first = CaptureSession::default().reduce(&CaptureEvent::StartRequested);
    assert_eq!(first.run, 1);
    assert!(first.is_connecting_run(1));

    let second = first.reduce(&CaptureEvent::StopRequested).reduce(&CaptureEvent::StartRequested);
    assert_eq!(second.run, 2);
    assert!(!second.is_connecting_run(1));
    assert!(second.is_connecting_run(2));
}

#[test]
fn rejected_start_keeps_run() {
    let state = running();
    let run = state.run;
    assert_eq!(state.reduce(&CaptureEvent::StartRequested).run, run);
}

// =============================================================
// Session id
// =============================================================

#[test]
fn session_id_last_write_wins() {
    let state = running().reduce(&CaptureEvent::SessionStarted { session_id: "s-2".to_owned() });
    assert_eq!(state.session_id.as_deref(), Some("s-2"));
}

#[test]
fn session_id_ignored_when_idle() {
    let state = CaptureSession::default().reduce(&CaptureEvent::SessionStarted { session_id: "x".to_owned() });
    assert!(state.session_id.is_none());
}

// =============================================================
// Analysis reducer
// =============================================================

#[test]
fn analysis_overwrites_metrics_and_frame() {
    let mut frame = analysis(3, 72);
    frame.peak_risk = 80;
    let state = running().reduce(&CaptureEvent::Analysis(frame));
    assert_eq!(state.current_risk, 72);
    assert_eq!(state.severity, Severity::High);
    assert_eq!(state.breakdown.get("knee"), Some(&72));
    assert_eq!(state.avg_risk, 36.0);
    assert_eq!(state.peak_risk, 80);
    assert_eq!(state.fps, 7.5);
    assert_eq!(state.frame_count, 1);
    assert_eq!(state.annotated_frame.as_deref(), Some("img-3"));
    assert_eq!(state.risk_history.to_vec(), vec![72]);
}

#[test]
fn analysis_ignored_unless_running() {
    let connecting = CaptureSession::default().reduce(&CaptureEvent::StartRequested);
    let state = connecting.clone().reduce(&CaptureEvent::Analysis(analysis(1, 50)));
    assert_eq!(state, connecting);

    let stopped = running().reduce(&CaptureEvent::StopRequested);
    let state = stopped.clone().reduce(&CaptureEvent::Analysis(analysis(1, 50)));
    assert_eq!(state, stopped);
}

#[test]
fn one_hundred_thirty_analyses_keep_newest_one_hundred_twenty() {
    let mut state = running();
    for risk in 0..130_u32 {
        state = state.reduce(&CaptureEvent::Analysis(analysis(u64::from(risk), risk)));
        assert!(state.risk_history.len() <= RISK_HISTORY_CAP);
    }
    assert_eq!(state.risk_history.to_vec(), (10..130).collect::<Vec<u32>>());
    assert_eq!(state.timeline.len(), 130);
    assert_eq!(state.frame_count, 130);
}

#[test]
fn stale_frame_is_discarded() {
    let state = running()
        .reduce(&CaptureEvent::Analysis(analysis(10, 40)))
        .reduce(&CaptureEvent::Analysis(analysis(9, 99)));
    assert_eq!(state.current_risk, 40);
    assert_eq!(state.risk_history.to_vec(), vec![40]);
    assert_eq!(state.stale_dropped, 1);
}

#[test]
fn repeated_frame_index_is_applied_in_arrival_order() {
    let state = running()
        .reduce(&CaptureEvent::Analysis(analysis(0, 10)))
        .reduce(&CaptureEvent::Analysis(analysis(0, 20)));
    assert_eq!(state.risk_history.to_vec(), vec![10, 20]);
}

#[test]
fn empty_annotated_frame_keeps_previous_image() {
    let mut blank = analysis(2, 30);
    blank.annotated_frame.clear();
    let state = running()
        .reduce(&CaptureEvent::Analysis(analysis(1, 20)))
        .reduce(&CaptureEvent::Analysis(blank));
    assert_eq!(state.annotated_frame.as_deref(), Some("img-1"));
}

// =============================================================
// Save request
// =============================================================

#[test]
fn save_request_requires_stopped_session_with_data() {
    assert!(running().save_request().is_none());
    assert!(running().reduce(&CaptureEvent::StopRequested).save_request().is_none());

    let state = running()
        .reduce(&CaptureEvent::Analysis(analysis(1, 20)))
        .reduce(&CaptureEvent::Analysis(analysis(2, 75)))
        .reduce(&CaptureEvent::StopRequested);
    let req = state.save_request().expect("save request");
    assert_eq!(req.session_id, "s-1");
    assert_eq!(req.risk_timeline, vec![20, 75]);
    assert_eq!(req.events.len(), 1);
    assert_eq!(req.peak_risk, 75);
    assert_eq!(req.frame_count, 2);
}

#[test]
fn save_request_requires_session_id() {
    let (state, _) = run(&[
        CaptureEvent::StartRequested,
        CaptureEvent::ChannelOpened,
        CaptureEvent::Analysis(analysis(1, 20)),
        CaptureEvent::StopRequested,
    ]);
    assert!(state.save_request().is_none());
}
