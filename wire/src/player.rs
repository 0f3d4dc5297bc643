//! `GET /players/{playerId}` profile payload.

use serde::{Deserialize, Serialize};

/// Aggregated history for one athlete.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProfile {
    pub player_id: i64,
    pub name: String,
    pub sport: String,
    pub team: String,
    pub age: u32,
    pub position: String,
    /// Overall risk per past session, oldest first.
    pub risk_history: Vec<RiskPoint>,
    pub past_matches: Vec<PastMatch>,
    pub drills: Vec<Drill>,
    pub injury_zones: Vec<InjuryZone>,
}

impl PlayerProfile {
    /// Whether the backend has any completed session for this player.
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.risk_history.is_empty()
    }

    /// Most recent overall risk.
    #[must_use]
    pub fn latest_risk(&self) -> Option<u32> {
        self.risk_history.last().map(|p| p.risk)
    }

    /// Change between the two most recent sessions; positive means riskier.
    #[must_use]
    pub fn risk_delta(&self) -> Option<i64> {
        let n = self.risk_history.len();
        if n < 2 {
            return None;
        }
        Some(i64::from(self.risk_history[n - 1].risk) - i64::from(self.risk_history[n - 2].risk))
    }

    /// Injury zones ordered by descending risk.
    #[must_use]
    pub fn zones_by_risk(&self) -> Vec<&InjuryZone> {
        let mut zones: Vec<&InjuryZone> = self.injury_zones.iter().collect();
        zones.sort_by(|a, b| b.risk.cmp(&a.risk).then_with(|| a.part.cmp(&b.part)));
        zones
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPoint {
    pub date: String,
    pub risk: u32,
    #[serde(default)]
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastMatch {
    pub date: String,
    pub opponent: String,
    pub risk_score: u32,
    pub status: String,
    #[serde(default)]
    pub highlights: String,
}

/// Corrective drill recommended for an at-risk zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub target_area: String,
    pub difficulty: String,
    /// Expected risk reduction in percentage points.
    pub risk_reduction: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryZone {
    pub part: String,
    pub risk: u32,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

#[cfg(test)]
#[path = "player_test.rs"]
mod tests;
