use super::*;

fn frame(index: u64, risk: u32, elapsed: f64, zone: &str) -> AnalysisFrame {
    let mut frame = AnalysisFrame { frame: index, risk, elapsed, ..AnalysisFrame::default() };
    frame.breakdown.insert(zone.to_owned(), risk);
    frame
}

#[test]
fn below_threshold_records_nothing() {
    let mut tracker = EventTracker::default();
    tracker.observe(&frame(1, 59, 0.1, "knee"));
    assert!(tracker.events().is_empty());
    assert!(!tracker.is_open());
}

#[test]
fn rising_edge_opens_event_and_tracks_peak() {
    let mut tracker = EventTracker::default();
    tracker.observe(&frame(1, 20, 0.1, "knee"));
    tracker.observe(&frame(2, 65, 0.2, "knee"));
    tracker.observe(&frame(3, 82, 61.5, "lower_back"));
    tracker.observe(&frame(4, 70, 61.6, "knee"));

    assert_eq!(tracker.events().len(), 1);
    let event = &tracker.events()[0];
    assert_eq!(event.frame, 3);
    assert_eq!(event.risk, 82);
    assert_eq!(event.part, "lower_back");
    assert_eq!(event.severity, Severity::Critical);
    assert_eq!(event.timestamp, "1:01");
    assert_eq!(event.description, "lower back risk peaked at 82%");
    assert!(tracker.is_open());
}

#[test]
fn falling_below_threshold_closes_event() {
    let mut tracker = EventTracker::default();
    tracker.observe(&frame(1, 70, 0.0, "hip"));
    tracker.observe(&frame(2, 10, 0.1, "hip"));
    tracker.observe(&frame(3, 61, 0.2, "ankle"));

    let parts: Vec<&str> = tracker.events().iter().map(|e| e.part.as_str()).collect();
    assert_eq!(parts, vec!["hip", "ankle"]);
}

#[test]
fn empty_breakdown_uses_overall_part() {
    let mut tracker = EventTracker::default();
    tracker.observe(&AnalysisFrame { risk: 90, ..AnalysisFrame::default() });
    assert_eq!(tracker.events()[0].part, "overall");
}

#[test]
fn clear_resets_events() {
    let mut tracker = EventTracker::default();
    tracker.observe(&frame(1, 90, 0.0, "knee"));
    tracker.clear();
    assert!(tracker.events().is_empty());
    assert!(!tracker.is_open());
}

#[test]
fn format_timestamp_pads_seconds() {
    assert_eq!(format_timestamp(0.0), "0:00");
    assert_eq!(format_timestamp(9.99), "0:09");
    assert_eq!(format_timestamp(125.0), "2:05");
    assert_eq!(format_timestamp(-3.0), "0:00");
    assert_eq!(format_timestamp(f64::NAN), "0:00");
}
