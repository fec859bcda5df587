//! Scoring state machine: point → game → set → match transitions, serve
//! rotation and tiebreak counting. Purely deterministic given the point
//! winner.

use log::debug;

use crate::engine::match_state::MatchState;
use crate::models::{GameScore, PointScore, SetScore, TeamSide};

/// Points needed to win a tiebreak game (with a 2-point margin).
pub const TIEBREAK_TARGET: u32 = 7;

/// Apply one resolved point to the running score. May complete the game,
/// the set, and the match in one call.
pub fn apply_point(state: &mut MatchState, winner: TeamSide) {
    match state.current_game {
        GameScore::Tiebreak { home, away } => apply_tiebreak_point(state, winner, home, away),
        _ => apply_regular_point(state, winner),
    }
}

fn apply_regular_point(state: &mut MatchState, winner: TeamSide) {
    match state.current_game {
        GameScore::Normal { home, away } => {
            let (winner_points, loser_points) = match winner {
                TeamSide::Home => (home, away),
                TeamSide::Away => (away, home),
            };
            match winner_points.next() {
                None => {
                    // winner already at Forty with the opponent below: game.
                    award_game(state, winner);
                }
                Some(next) => {
                    if next == PointScore::Forty && loser_points == PointScore::Forty {
                        state.current_game = GameScore::Deuce;
                    } else {
                        state.current_game = match winner {
                            TeamSide::Home => GameScore::Normal { home: next, away },
                            TeamSide::Away => GameScore::Normal { home, away: next },
                        };
                    }
                }
            }
        }
        GameScore::Deuce => {
            state.current_game = GameScore::Advantage(winner);
        }
        GameScore::Advantage(holder) => {
            if holder == winner {
                award_game(state, winner);
            } else {
                state.current_game = GameScore::Deuce;
            }
        }
        GameScore::Tiebreak { .. } => unreachable!("tiebreak handled by apply_tiebreak_point"),
    }
}

fn apply_tiebreak_point(state: &mut MatchState, winner: TeamSide, home: u32, away: u32) {
    let (home, away) = match winner {
        TeamSide::Home => (home + 1, away),
        TeamSide::Away => (home, away + 1),
    };

    if (home >= TIEBREAK_TARGET || away >= TIEBREAK_TARGET) && home.abs_diff(away) >= 2 {
        debug!("tiebreak won {}-{} by {:?}", home, away, winner);
        state.current_set.add_game(winner);
        state.current_game = GameScore::new_game();
        state.current_server = state.current_server.opponent();
        // The tiebreak decides the set directly; the 2-game margin rule does
        // not apply to a 7-6 set.
        archive_set(state);
    } else {
        state.current_game = GameScore::Tiebreak { home, away };
        // Serve alternates after the first point, then after every two.
        if (home + away) % 2 == 1 {
            state.current_server = state.current_server.opponent();
        }
    }
}

fn award_game(state: &mut MatchState, winner: TeamSide) {
    state.current_set.add_game(winner);
    state.current_game = GameScore::new_game();
    state.current_server = state.current_server.opponent();

    let games_per_set = state.config.games_per_set;
    let home = state.current_set.home;
    let away = state.current_set.away;

    if (home >= games_per_set && home >= away + 2) || (away >= games_per_set && away >= home + 2)
    {
        archive_set(state);
    } else if state.config.tiebreak_enabled && home == games_per_set && away == games_per_set {
        state.current_game = GameScore::Tiebreak { home: 0, away: 0 };
    }
}

fn archive_set(state: &mut MatchState) {
    debug!("set complete {}-{}", state.current_set.home, state.current_set.away);
    state.sets.push(state.current_set);
    state.current_set = SetScore::default();

    let sets_to_win = state.config.sets_to_win;
    for side in [TeamSide::Home, TeamSide::Away] {
        if state.sets_won(side) >= sets_to_win {
            state.is_match_complete = true;
            state.winner = Some(side);
            debug!("match complete, winner {:?}", side);
        }
    }
}
