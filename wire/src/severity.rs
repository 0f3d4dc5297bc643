//! Coarse risk classification shared by every view.

use serde::{Deserialize, Serialize};

/// Severity band for a 0-100 risk score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify a risk score using the backend's thresholds (30 / 60 / 80).
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            0..30 => Self::Low,
            30..60 => Self::Medium,
            60..80 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Upper-case label as sent on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "severity_test.rs"]
mod tests;
