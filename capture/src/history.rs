//! Bounded, insertion-ordered risk history for the live sparkline.

use std::collections::VecDeque;

/// Maximum number of risk values retained.
pub const RISK_HISTORY_CAP: usize = 120;

/// Most recent risk values, oldest first. Pushing past [`RISK_HISTORY_CAP`]
/// evicts the oldest value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiskHistory {
    values: VecDeque<u32>,
}

impl RiskHistory {
    pub fn push(&mut self, risk: u32) {
        if self.values.len() >= RISK_HISTORY_CAP {
            self.values.pop_front();
        }
        self.values.push_back(risk);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.values.back().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.values.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
