use serde::{Deserialize, Serialize};

use crate::coach::ActiveInstructionEffect;
use crate::engine::intervention::InterventionOpportunity;
use crate::models::{GameScore, MatchConfig, SetScore, TeamSide, TennisPlayer};

/// Points the detector looks back over for a momentum shift.
pub const MOMENTUM_WINDOW: usize = 3;

/// Sentinel for "no intervention yet": far enough back that point 0 clears
/// the cooldown.
pub const NO_INTERVENTION: i64 = -10;

/// The single mutable aggregate the core operates on. Caller-owned; exactly
/// one logical point mutates it at a time, and every rejected call leaves it
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub home_player: TennisPlayer,
    pub away_player: TennisPlayer,
    pub config: MatchConfig,

    /// Completed sets, in order.
    pub sets: Vec<SetScore>,
    pub current_set: SetScore,
    pub current_game: GameScore,
    pub current_server: TeamSide,

    pub coach_budget_remaining: u32,
    pub used_instructions: Vec<String>,
    pub active_instruction_effects: Vec<ActiveInstructionEffect>,
    /// Point number of the last granted opportunity (or [`NO_INTERVENTION`]).
    pub last_intervention_point: i64,
    /// Set while an opportunity awaits the caller's decision; point
    /// advancement is rejected until it is resolved.
    pub pending_intervention: Option<InterventionOpportunity>,

    /// Winners of the most recent points, oldest first, bounded to
    /// [`MOMENTUM_WINDOW`].
    pub recent_point_winners: Vec<TeamSide>,

    pub is_match_complete: bool,
    pub winner: Option<TeamSide>,
    /// Monotonically increasing count of resolved points.
    pub current_point_number: u64,
}

impl MatchState {
    pub fn player(&self, side: TeamSide) -> &TennisPlayer {
        match side {
            TeamSide::Home => &self.home_player,
            TeamSide::Away => &self.away_player,
        }
    }

    pub fn player_mut(&mut self, side: TeamSide) -> &mut TennisPlayer {
        match side {
            TeamSide::Home => &mut self.home_player,
            TeamSide::Away => &mut self.away_player,
        }
    }

    pub fn server(&self) -> &TennisPlayer {
        self.player(self.current_server)
    }

    pub fn receiver(&self) -> &TennisPlayer {
        self.player(self.current_server.opponent())
    }

    /// Completed sets won by a side.
    pub fn sets_won(&self, side: TeamSide) -> u32 {
        self.sets.iter().filter(|set| set.leader() == Some(side)).count() as u32
    }

    pub fn points_since_last_intervention(&self) -> i64 {
        self.current_point_number as i64 - self.last_intervention_point
    }

    pub fn push_recent_winner(&mut self, winner: TeamSide) {
        self.recent_point_winners.push(winner);
        if self.recent_point_winners.len() > MOMENTUM_WINDOW {
            self.recent_point_winners.remove(0);
        }
    }

    pub fn interventions_used(&self) -> u32 {
        self.config.coach_budget.saturating_sub(self.coach_budget_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::initialize_match;
    use crate::models::PlayerStats;

    fn test_state() -> MatchState {
        let stats = PlayerStats {
            serve: 70.0,
            receive: 70.0,
            volley: 70.0,
            stroke: 70.0,
            mental: 70.0,
            stamina: 70.0,
        };
        let home = TennisPlayer::new("h", "Home", stats, vec![]);
        let away = TennisPlayer::new("a", "Away", stats, vec![]);
        initialize_match(home, away, MatchConfig::default()).unwrap()
    }

    #[test]
    fn test_sets_won_counts_leaders() {
        let mut state = test_state();
        state.sets.push(SetScore { home: 6, away: 3 });
        state.sets.push(SetScore { home: 4, away: 6 });
        state.sets.push(SetScore { home: 7, away: 6 });
        assert_eq!(state.sets_won(TeamSide::Home), 2);
        assert_eq!(state.sets_won(TeamSide::Away), 1);
    }

    #[test]
    fn test_recent_winner_window_bounded() {
        let mut state = test_state();
        for _ in 0..5 {
            state.push_recent_winner(TeamSide::Home);
        }
        state.push_recent_winner(TeamSide::Away);
        assert_eq!(state.recent_point_winners.len(), MOMENTUM_WINDOW);
        assert_eq!(*state.recent_point_winners.last().unwrap(), TeamSide::Away);
    }

    #[test]
    fn test_state_json_round_trip() {
        // the whole aggregate must survive save/load
        let mut state = test_state();
        state.sets.push(SetScore { home: 6, away: 4 });
        state.current_game = GameScore::Advantage(TeamSide::Away);
        state.current_point_number = 52;

        let json = serde_json::to_string(&state).unwrap();
        let restored: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_server_receiver_accessors() {
        let mut state = test_state();
        assert_eq!(state.server().id, "h");
        assert_eq!(state.receiver().id, "a");
        state.current_server = TeamSide::Away;
        assert_eq!(state.server().id, "a");
        assert_eq!(state.receiver().id, "h");
    }
}
