//! Intervention opportunity detection: decides, before a point is played,
//! whether the match has reached a moment worth pausing for the coach.
//! Pure read of the match state; idempotent between points.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::match_state::{MatchState, MOMENTUM_WINDOW};
use crate::engine::situation;
use crate::models::TeamSide;

/// Minimum points between two granted opportunities.
pub const INTERVENTION_COOLDOWN: i64 = 3;

/// Stamina fraction below which the detector flags fatigue.
const LOW_STAMINA_FRACTION: f32 = 0.3;

/// Mental gauge below which the detector flags pressure.
const MENTAL_PRESSURE_THRESHOLD: f32 = 30.0;

/// Whether the moment threatens or favors the primary (home) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterventionKind {
    Crisis,
    Chance,
}

/// The ten recognized intervention situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterventionSituation {
    BreakPointAgainst,
    BreakPointFor,
    SetPointAgainst,
    SetPointFor,
    MatchPointAgainst,
    MatchPointFor,
    Tiebreak,
    MomentumShift,
    StaminaLow,
    MentalPressure,
}

/// A detected high-leverage moment, surfaced to the external actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionOpportunity {
    pub kind: InterventionKind,
    pub situation: InterventionSituation,
    /// Urgency 0-100, for the caller's presentation layer.
    pub urgency: u8,
    pub description: String,
}

fn opportunity(
    kind: InterventionKind,
    situation: InterventionSituation,
    urgency: u8,
    description: &str,
) -> InterventionOpportunity {
    InterventionOpportunity { kind, situation, urgency, description: description.to_string() }
}

/// Evaluate the current state for an opportunity. Returns `None` when the
/// coach system is off, the budget is spent, the match is over, or the
/// cooldown since the last intervention has not elapsed. Conditions are
/// checked in fixed priority order and the first hit wins.
pub fn detect(state: &MatchState) -> Option<InterventionOpportunity> {
    if !state.config.coach_system_enabled
        || state.coach_budget_remaining == 0
        || state.is_match_complete
    {
        return None;
    }
    if state.points_since_last_intervention() < INTERVENTION_COOLDOWN {
        return None;
    }

    let found = check_break_point(state)
        .or_else(|| check_match_point(state))
        .or_else(|| check_set_point(state))
        .or_else(|| check_tiebreak(state))
        .or_else(|| check_stamina(state))
        .or_else(|| check_momentum(state))
        .or_else(|| check_mental_pressure(state));

    if let Some(opp) = &found {
        debug!(
            "intervention opportunity at point {}: {:?} ({:?}, urgency {})",
            state.current_point_number, opp.situation, opp.kind, opp.urgency
        );
    }
    found
}

fn check_break_point(state: &MatchState) -> Option<InterventionOpportunity> {
    if !situation::is_break_point(state) {
        return None;
    }
    // A break point threatens whoever is serving.
    Some(if state.current_server == TeamSide::Home {
        opportunity(
            InterventionKind::Crisis,
            InterventionSituation::BreakPointAgainst,
            80,
            "Break point against! The serve is under threat",
        )
    } else {
        opportunity(
            InterventionKind::Chance,
            InterventionSituation::BreakPointFor,
            80,
            "Break point! A chance to take the opponent's serve",
        )
    })
}

fn check_match_point(state: &MatchState) -> Option<InterventionOpportunity> {
    if !situation::is_match_point(state) {
        return None;
    }
    let sets_to_win = state.config.sets_to_win;
    let home_on_the_brink = state.sets_won(TeamSide::Home) + 1 == sets_to_win;
    let away_on_the_brink = state.sets_won(TeamSide::Away) + 1 == sets_to_win;

    if home_on_the_brink && state.current_server == TeamSide::Home {
        Some(opportunity(
            InterventionKind::Chance,
            InterventionSituation::MatchPointFor,
            100,
            "Match point! One point from victory",
        ))
    } else if away_on_the_brink && state.current_server == TeamSide::Away {
        Some(opportunity(
            InterventionKind::Crisis,
            InterventionSituation::MatchPointAgainst,
            100,
            "Match point against! One point from defeat",
        ))
    } else {
        None
    }
}

fn check_set_point(state: &MatchState) -> Option<InterventionOpportunity> {
    if !situation::is_set_point(state) {
        return None;
    }
    let games_per_set = state.config.games_per_set;
    let home_needs_one = state.current_set.home + 1 == games_per_set;
    let away_needs_one = state.current_set.away + 1 == games_per_set;

    if home_needs_one && state.current_server == TeamSide::Home {
        Some(opportunity(
            InterventionKind::Chance,
            InterventionSituation::SetPointFor,
            90,
            "Set point! This set is there for the taking",
        ))
    } else if away_needs_one && state.current_server == TeamSide::Away {
        Some(opportunity(
            InterventionKind::Crisis,
            InterventionSituation::SetPointAgainst,
            90,
            "Set point against! The set is slipping away",
        ))
    } else {
        None
    }
}

fn check_tiebreak(state: &MatchState) -> Option<InterventionOpportunity> {
    if situation::is_tiebreak(state) {
        Some(opportunity(
            InterventionKind::Chance,
            InterventionSituation::Tiebreak,
            75,
            "Tiebreak! Every point counts now",
        ))
    } else {
        None
    }
}

fn check_stamina(state: &MatchState) -> Option<InterventionOpportunity> {
    let home_low = state.home_player.stamina_fraction() < LOW_STAMINA_FRACTION;
    let away_low = state.away_player.stamina_fraction() < LOW_STAMINA_FRACTION;
    if home_low || away_low {
        Some(opportunity(
            InterventionKind::Crisis,
            InterventionSituation::StaminaLow,
            60,
            "Stamina is running out. Time to manage the legs",
        ))
    } else {
        None
    }
}

fn check_momentum(state: &MatchState) -> Option<InterventionOpportunity> {
    let winners = &state.recent_point_winners;
    if winners.len() >= MOMENTUM_WINDOW && winners.iter().all(|w| *w == TeamSide::Away) {
        Some(opportunity(
            InterventionKind::Crisis,
            InterventionSituation::MomentumShift,
            70,
            "The momentum is turning. Something has to change",
        ))
    } else {
        None
    }
}

fn check_mental_pressure(state: &MatchState) -> Option<InterventionOpportunity> {
    if state.home_player.current_mental < MENTAL_PRESSURE_THRESHOLD {
        Some(opportunity(
            InterventionKind::Crisis,
            InterventionSituation::MentalPressure,
            65,
            "The pressure is showing. The player needs steadying",
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::initialize_match;
    use crate::models::{GameScore, MatchConfig, PlayerStats, PointScore, SetScore, TennisPlayer};

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

    fn at_break_point(state: &mut MatchState) {
        state.current_game =
            GameScore::Normal { home: PointScore::Thirty, away: PointScore::Forty };
    }

    #[test]
    fn test_quiet_state_detects_nothing() {
        let state = test_state();
        assert!(detect(&state).is_none());
    }

    #[test]
    fn test_break_point_classification() {
        let mut state = test_state();
        at_break_point(&mut state);
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::BreakPointAgainst);
        assert_eq!(opp.kind, InterventionKind::Crisis);
        assert_eq!(opp.urgency, 80);

        // with away serving, the same score is home's chance
        state.current_game =
            GameScore::Normal { home: PointScore::Forty, away: PointScore::Thirty };
        state.current_server = TeamSide::Away;
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::BreakPointFor);
        assert_eq!(opp.kind, InterventionKind::Chance);
    }

    #[test]
    fn test_cooldown_blocks_detection() {
        let mut state = test_state();
        at_break_point(&mut state);
        state.current_point_number = 10;
        state.last_intervention_point = 8;
        assert!(detect(&state).is_none());

        state.last_intervention_point = 7;
        assert!(detect(&state).is_some());
    }

    #[test]
    fn test_budget_gate() {
        let mut state = test_state();
        at_break_point(&mut state);
        state.coach_budget_remaining = 0;
        assert!(detect(&state).is_none());
    }

    #[test]
    fn test_coach_system_disabled() {
        let mut state = test_state();
        at_break_point(&mut state);
        state.config.coach_system_enabled = false;
        assert!(detect(&state).is_none());
    }

    #[test]
    fn test_set_point_for_server() {
        let mut state = test_state();
        state.current_set = SetScore { home: 5, away: 4 };
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::SetPointFor);
        assert_eq!(opp.kind, InterventionKind::Chance);
        assert_eq!(opp.urgency, 90);
    }

    #[test]
    fn test_match_point_shadows_set_point() {
        let mut state = test_state();
        state.sets.push(SetScore { home: 6, away: 4 });
        state.current_set = SetScore { home: 5, away: 4 };
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::MatchPointFor);
        assert_eq!(opp.urgency, 100);
    }

    #[test]
    fn test_match_point_against_is_crisis() {
        let mut state = test_state();
        state.sets.push(SetScore { home: 4, away: 6 });
        state.current_set = SetScore { home: 4, away: 5 };
        state.current_server = TeamSide::Away;
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::MatchPointAgainst);
        assert_eq!(opp.kind, InterventionKind::Crisis);
    }

    #[test]
    fn test_tiebreak_opportunity() {
        let mut state = test_state();
        state.current_set = SetScore { home: 6, away: 6 };
        state.current_game = GameScore::Tiebreak { home: 0, away: 0 };
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::Tiebreak);
        assert_eq!(opp.urgency, 75);
    }

    #[test]
    fn test_low_stamina_opportunity() {
        let mut state = test_state();
        state.away_player.current_stamina = 15.0;
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::StaminaLow);
        assert_eq!(opp.kind, InterventionKind::Crisis);
    }

    #[test]
    fn test_momentum_shift_after_three_straight_losses() {
        let mut state = test_state();
        for _ in 0..MOMENTUM_WINDOW {
            state.push_recent_winner(TeamSide::Away);
        }
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::MomentumShift);

        // a single home point resets the run
        state.push_recent_winner(TeamSide::Home);
        assert!(detect(&state).is_none());
    }

    #[test]
    fn test_mental_pressure_opportunity() {
        let mut state = test_state();
        state.home_player.current_mental = 20.0;
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::MentalPressure);
        assert_eq!(opp.urgency, 65);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let mut state = test_state();
        at_break_point(&mut state);
        let first = detect(&state);
        let second = detect(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_break_point_outranks_stamina() {
        let mut state = test_state();
        at_break_point(&mut state);
        state.home_player.current_stamina = 10.0;
        let opp = detect(&state).unwrap();
        assert_eq!(opp.situation, InterventionSituation::BreakPointAgainst);
    }
}
