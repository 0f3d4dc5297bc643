use super::*;

#[test]
fn severity_class_covers_every_band() {
    assert_eq!(severity_class(Severity::Low), "severity--low");
    assert_eq!(severity_class(Severity::Critical), "severity--critical");
}

#[test]
fn risk_color_follows_backend_bands() {
    assert_eq!(risk_color(10), severity_color(Severity::Low));
    assert_eq!(risk_color(45), severity_color(Severity::Medium));
    assert_eq!(risk_color(60), severity_color(Severity::High));
    assert_eq!(risk_color(95), severity_color(Severity::Critical));
}

#[test]
fn part_label_title_cases_keys() {
    assert_eq!(part_label("lower_back"), "Lower Back");
    assert_eq!(part_label("KNEE"), "Knee");
    assert_eq!(part_label("overall"), "Overall");
    assert_eq!(part_label(""), "");
}

#[test]
fn trend_helpers_map_each_direction() {
    assert_eq!(trend_arrow(Trend::Increasing), "↑");
    assert_eq!(trend_class(Trend::Decreasing), "trend--down");
    assert_eq!(trend_class(Trend::Stable), "trend--flat");
}

#[test]
fn delta_label_signs_positive_values() {
    assert_eq!(delta_label(7), "+7");
    assert_eq!(delta_label(-3), "-3");
    assert_eq!(delta_label(0), "0");
}
