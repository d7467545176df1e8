use serde::{Deserialize, Serialize};

use super::ScoringAction;

/// A single tracked play from a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEntry {
    pub action: ScoringAction,
    pub player: String,
    #[serde(default)]
    pub team: Option<String>,
    /// Period the play happened in (1-based, 0 when unknown)
    #[serde(default)]
    pub period: u8,
}

impl PlayEntry {
    pub fn new(player: impl Into<String>, action: ScoringAction) -> Self {
        Self {
            action,
            player: player.into(),
            team: None,
            period: 0,
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_period(mut self, period: u8) -> Self {
        self.period = period;
        self
    }
}
