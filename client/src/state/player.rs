//! Player dashboard state.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use wire::PlayerProfile;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlayerView {
    #[default]
    Loading,
    Ready(Box<PlayerProfile>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub player_id: String,
    pub view: PlayerView,
}

impl PlayerState {
    pub fn new(player_id: &str) -> Self {
        Self { player_id: player_id.to_owned(), view: PlayerView::Loading }
    }

    /// Record a fetch result; results for a different player id are dropped.
    pub fn apply<E: std::fmt::Display>(&mut self, player_id: &str, result: Result<PlayerProfile, E>) {
        if player_id != self.player_id {
            return;
        }
        self.view = match result {
            Ok(profile) => PlayerView::Ready(Box::new(profile)),
            Err(err) => PlayerView::Failed(err.to_string()),
        };
    }

    pub fn profile(&self) -> Option<&PlayerProfile> {
        match &self.view {
            PlayerView::Ready(profile) => Some(profile),
            _ => None,
        }
    }

    /// Risk history values, oldest first, for the trend chart.
    pub fn trend_values(&self) -> Vec<u32> {
        self.profile().map(|p| p.risk_history.iter().map(|point| point.risk).collect()).unwrap_or_default()
    }
}

/// Backend player ids are numeric; anything else is rejected before fetching.
pub fn parse_player_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
