use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Match format and coach-system configuration. Immutable for the life of a
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Sets needed to win the match.
    pub sets_to_win: u32,
    /// Games needed to win a set (with a 2-game margin).
    pub games_per_set: u32,
    /// Play a tiebreak game when both sides reach `games_per_set` games.
    pub tiebreak_enabled: bool,
    /// Total coach interventions allowed per match.
    pub coach_budget: u32,
    /// Master switch for the intervention subsystem.
    pub coach_system_enabled: bool,
}

impl Default for MatchConfig {
    fn default() -> MatchConfig {
        MatchConfig {
            sets_to_win: 2,
            games_per_set: 6,
            tiebreak_enabled: true,
            coach_budget: 3,
            coach_system_enabled: true,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sets_to_win == 0 {
            return Err(MatchError::InvalidConfig("sets_to_win must be positive".to_string()));
        }
        if self.games_per_set == 0 {
            return Err(MatchError::InvalidConfig("games_per_set must be positive".to_string()));
        }
        Ok(())
    }
}
