//! Presentation helpers for severities, body zones, and trends.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;

use wire::{Severity, Trend};

/// CSS modifier class for a severity badge or bar.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "severity--low",
        Severity::Medium => "severity--medium",
        Severity::High => "severity--high",
        Severity::Critical => "severity--critical",
    }
}

/// Canvas fill colour for a severity.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "#22c55e",
        Severity::Medium => "#eab308",
        Severity::High => "#f97316",
        Severity::Critical => "#ef4444",
    }
}

/// Canvas colour for a raw 0-100 risk score.
pub fn risk_color(risk: u32) -> &'static str {
    severity_color(Severity::from_score(risk))
}

/// Human label for a backend body-part key (`lower_back` -> `Lower Back`).
pub fn part_label(part: &str) -> String {
    part.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "↑",
        Trend::Stable => "→",
        Trend::Decreasing => "↓",
    }
}

pub fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "trend--up",
        Trend::Stable => "trend--flat",
        Trend::Decreasing => "trend--down",
    }
}

/// Signed change label, e.g. `+7` or `-3`.
pub fn delta_label(delta: i64) -> String {
    if delta > 0 { format!("+{delta}") } else { delta.to_string() }
}
