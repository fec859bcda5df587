//! Situational reads of the match state: break/set/match point, tiebreak,
//! and whether a side is ahead or behind. Pure queries; the detector and the
//! ability aggregator both consume them.

use serde::{Deserialize, Serialize};

use crate::engine::match_state::MatchState;
use crate::models::{GameScore, PointScore, TeamSide};

/// Flags evaluated for one side on one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationFlags {
    pub break_point: bool,
    pub set_point: bool,
    pub match_point: bool,
    pub tiebreak: bool,
    pub behind: bool,
    pub ahead: bool,
}

impl SituationFlags {
    pub fn for_side(state: &MatchState, side: TeamSide) -> SituationFlags {
        SituationFlags {
            break_point: is_break_point(state),
            set_point: is_set_point(state),
            match_point: is_match_point(state),
            tiebreak: is_tiebreak(state),
            behind: is_behind(state, side),
            ahead: is_behind(state, side.opponent()),
        }
    }
}

/// The receiver wins the game with this point.
pub fn is_break_point(state: &MatchState) -> bool {
    let receiver = state.current_server.opponent();
    match state.current_game {
        GameScore::Normal { home, away } => {
            let (receiver_points, server_points) = match receiver {
                TeamSide::Home => (home, away),
                TeamSide::Away => (away, home),
            };
            receiver_points == PointScore::Forty && server_points != PointScore::Forty
        }
        GameScore::Advantage(side) => side == receiver,
        GameScore::Deuce | GameScore::Tiebreak { .. } => false,
    }
}

/// Either side is one game from taking the set and the set is still close.
pub fn is_set_point(state: &MatchState) -> bool {
    let games_per_set = state.config.games_per_set;
    let home = state.current_set.home;
    let away = state.current_set.away;

    (home + 1 == games_per_set || away + 1 == games_per_set) && home.abs_diff(away) <= 1
}

/// A set point that would also decide the match.
pub fn is_match_point(state: &MatchState) -> bool {
    let sets_to_win = state.config.sets_to_win;
    let home_sets = state.sets_won(TeamSide::Home);
    let away_sets = state.sets_won(TeamSide::Away);

    (home_sets + 1 == sets_to_win || away_sets + 1 == sets_to_win) && is_set_point(state)
}

/// A tiebreak game is in progress, or the games are level at the threshold
/// with tiebreak enabled.
pub fn is_tiebreak(state: &MatchState) -> bool {
    if state.current_game.is_tiebreak() {
        return true;
    }
    state.config.tiebreak_enabled
        && state.current_set.home == state.config.games_per_set
        && state.current_set.away == state.config.games_per_set
}

/// Trailing on sets, or level on sets and trailing on games.
pub fn is_behind(state: &MatchState, side: TeamSide) -> bool {
    let opponent = side.opponent();
    let own_sets = state.sets_won(side);
    let opp_sets = state.sets_won(opponent);
    if own_sets != opp_sets {
        return own_sets < opp_sets;
    }
    state.current_set.games(side) < state.current_set.games(opponent)
}
