use super::*;

#[test]
fn from_score_uses_backend_thresholds() {
    assert_eq!(Severity::from_score(0), Severity::Low);
    assert_eq!(Severity::from_score(29), Severity::Low);
    assert_eq!(Severity::from_score(30), Severity::Medium);
    assert_eq!(Severity::from_score(59), Severity::Medium);
    assert_eq!(Severity::from_score(60), Severity::High);
    assert_eq!(Severity::from_score(79), Severity::High);
    assert_eq!(Severity::from_score(80), Severity::Critical);
    assert_eq!(Severity::from_score(250), Severity::Critical);
}

#[test]
fn severity_serializes_upper_case() {
    let json = serde_json::to_string(&Severity::Critical).expect("serialize");
    assert_eq!(json, "\"CRITICAL\"");
    let parsed: Severity = serde_json::from_str("\"MEDIUM\"").expect("deserialize");
    assert_eq!(parsed, Severity::Medium);
}

#[test]
fn severity_orders_by_danger() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::High < Severity::Critical);
    assert_eq!(Severity::High.to_string(), "HIGH");
}
