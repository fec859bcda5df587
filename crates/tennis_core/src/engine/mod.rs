//! Match engine facade: the synchronous, call-by-call entry points the
//! presentation layer drives. One logical point per call; the only
//! suspension is the semantic pause while an intervention decision is
//! outstanding.

pub mod intervention;
pub mod match_state;
pub mod point_resolver;
pub mod scoring;
pub mod situation;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::coach::{self, CoachInstruction, InstructionResult};
use crate::error::{MatchError, Result};
use crate::models::{
    GameScore, MatchConfig, MatchSummary, PointResult, SetScore, TeamSide, TennisPlayer,
};

pub use intervention::{InterventionKind, InterventionOpportunity, InterventionSituation};
pub use match_state::MatchState;

/// Stamina drained per point: 1 + U(0, 2).
const STAMINA_DRAIN_BASE: f32 = 1.0;
const STAMINA_DRAIN_SPREAD: f32 = 2.0;
/// Mental swing after a point.
const MENTAL_GAIN_ON_WIN: f32 = 3.0;
const MENTAL_LOSS_ON_DEFEAT: f32 = 4.0;

/// What a call to [`MatchEngine::advance_point`] produced: exactly one of a
/// resolved point or a pause awaiting the caller's decision, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointOutcome {
    Point(PointResult),
    AwaitingDecision(InterventionOpportunity),
}

/// Build a fresh match state: zero sets played, full coach budget, Home
/// serving first, point counter at zero.
pub fn initialize_match(
    home_player: TennisPlayer,
    away_player: TennisPlayer,
    config: MatchConfig,
) -> Result<MatchState> {
    config.validate()?;
    Ok(MatchState {
        coach_budget_remaining: config.coach_budget,
        home_player,
        away_player,
        sets: Vec::new(),
        current_set: SetScore::default(),
        current_game: GameScore::new_game(),
        current_server: TeamSide::Home,
        used_instructions: Vec::new(),
        active_instruction_effects: Vec::new(),
        last_intervention_point: match_state::NO_INTERVENTION,
        pending_intervention: None,
        recent_point_winners: Vec::new(),
        is_match_complete: false,
        winner: None,
        current_point_number: 0,
        config,
    })
}

/// The simulation driver. Owns the injected random source; the match state
/// stays with the caller and is borrowed exclusively per call.
pub struct MatchEngine<R: Rng> {
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine with a seeded generator: the same seed over the same calls
    /// replays the same match.
    pub fn from_seed(seed: u64) -> MatchEngine<ChaCha8Rng> {
        MatchEngine { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl<R: Rng> MatchEngine<R> {
    pub fn new(rng: R) -> MatchEngine<R> {
        MatchEngine { rng }
    }

    /// Advance the match by one point, or pause on a detected intervention
    /// opportunity. Rejected (state untouched) when the match is complete or
    /// a decision is still outstanding.
    pub fn advance_point(&mut self, state: &mut MatchState) -> Result<PointOutcome> {
        if state.is_match_complete {
            return Err(MatchError::MatchComplete);
        }
        if state.pending_intervention.is_some() {
            return Err(MatchError::InterventionPending);
        }

        if let Some(opportunity) = intervention::detect(state) {
            state.pending_intervention = Some(opportunity.clone());
            return Ok(PointOutcome::AwaitingDecision(opportunity));
        }

        let result = point_resolver::resolve_point(state, &mut self.rng);
        trace!(
            "point {}: {:?} by {:?} (p={:.3}, roll={:.3})",
            state.current_point_number,
            result.reason,
            result.winner,
            result.success_rate,
            result.roll
        );

        scoring::apply_point(state, result.winner);
        self.update_condition(state, result.winner);
        coach::decay_effects(state);
        state.push_recent_winner(result.winner);
        state.current_point_number += 1;

        Ok(PointOutcome::Point(result))
    }

    /// Resolve the outstanding opportunity with a chosen instruction, or
    /// `None` to skip (which also models a decision timeout). A skip stamps
    /// the cooldown but consumes no budget and records nothing as used.
    pub fn resolve_intervention(
        &mut self,
        state: &mut MatchState,
        choice: Option<&CoachInstruction>,
    ) -> Result<Option<InstructionResult>> {
        let Some(opportunity) = state.pending_intervention.clone() else {
            return Err(MatchError::NoInterventionPending);
        };

        let Some(instruction) = choice else {
            debug!("intervention skipped at point {}", state.current_point_number);
            state.last_intervention_point = state.current_point_number as i64;
            state.pending_intervention = None;
            return Ok(None);
        };

        if state.used_instructions.contains(&instruction.id) {
            return Err(MatchError::InstructionAlreadyUsed(instruction.id.clone()));
        }
        if !instruction.effects.requirements.is_empty()
            && !instruction.effects.requirements.contains(&opportunity.situation)
        {
            return Err(MatchError::SituationNotMet {
                instruction: instruction.id.clone(),
                situation: opportunity.situation,
            });
        }
        if state.coach_budget_remaining == 0 {
            return Err(MatchError::BudgetExhausted);
        }

        let result = coach::execute_instruction(instruction, state, &mut self.rng);
        state.pending_intervention = None;
        Ok(Some(result))
    }

    /// Per-point gauge updates: both players drain stamina; the winner's
    /// side gains mental, the loser's drops.
    fn update_condition(&mut self, state: &mut MatchState, winner: TeamSide) {
        let drain = STAMINA_DRAIN_BASE + self.rng.gen::<f32>() * STAMINA_DRAIN_SPREAD;
        state.home_player.drain_stamina(drain);
        state.away_player.drain_stamina(drain);

        state.player_mut(winner).adjust_mental(MENTAL_GAIN_ON_WIN);
        state.player_mut(winner.opponent()).adjust_mental(-MENTAL_LOSS_ON_DEFEAT);
    }
}

/// Aggregate view of a finished match, or `None` while play continues.
pub fn match_summary(state: &MatchState) -> Option<MatchSummary> {
    let winner = state.winner?;
    Some(MatchSummary {
        winner,
        sets: state.sets.clone(),
        total_points: state.current_point_number,
        interventions_used: state.interventions_used(),
    })
}
