//! Coach instructions: the human-selected, budget-limited effects applied at
//! intervention opportunities, and the lifecycle of their active bonuses.

pub mod catalog;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::intervention::InterventionSituation;
use crate::engine::match_state::MatchState;
use crate::special_ability::EffectBundle;

pub use catalog::{generate_instruction_choices, instruction_catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionCategory {
    Offensive,
    Defensive,
    Mental,
    Stamina,
    Tactical,
    Emergency,
}

/// Effect tier. Stronger tiers trade success probability for impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionEffectiveness {
    Basic,
    Advanced,
    Risky,
    Emergency,
}

/// Bonus payload of an instruction, plus how long it lasts and which
/// situations (if any) it is restricted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionEffects {
    pub bundle: EffectBundle,
    /// Effect lifetime in points.
    pub duration: u32,
    /// When non-empty, the instruction may only be chosen while one of these
    /// situations is the pending opportunity.
    pub requirements: Vec<InterventionSituation>,
}

/// Static catalog entry. Read-only input; the core never mutates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachInstruction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: InstructionCategory,
    pub effectiveness: InstructionEffectiveness,
    pub effects: InstructionEffects,
    /// Probability the player executes the instruction.
    pub success_rate: f32,
    /// Applied to the effect bundle on success.
    pub success_multiplier: f32,
    /// Mental malus applied for one point on failure.
    pub failure_penalty: f32,
}

/// An instruction bonus currently in force. Invariant: `remaining_points > 0`
/// for every listed entry; `decay_effects` removes entries the point their
/// counter reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveInstructionEffect {
    pub instruction_id: String,
    pub effects: EffectBundle,
    pub remaining_points: u32,
}

/// What came of executing an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionResult {
    pub instruction_id: String,
    pub success: bool,
    pub message: String,
}

/// Resolve a chosen instruction: one Bernoulli draw at its success rate.
/// Success pushes the multiplied bundle for `duration` points; failure
/// pushes only the mental penalty for a single point. Either way the
/// instruction is spent: budget down, id recorded, cooldown stamped.
pub fn execute_instruction(
    instruction: &CoachInstruction,
    state: &mut MatchState,
    rng: &mut impl Rng,
) -> InstructionResult {
    let roll: f32 = rng.gen();
    let success = roll < instruction.success_rate;

    if success {
        state.active_instruction_effects.push(ActiveInstructionEffect {
            instruction_id: instruction.id.clone(),
            effects: instruction.effects.bundle.scaled(instruction.success_multiplier),
            remaining_points: instruction.effects.duration,
        });
    } else {
        state.active_instruction_effects.push(ActiveInstructionEffect {
            instruction_id: instruction.id.clone(),
            effects: EffectBundle { mental: instruction.failure_penalty, ..Default::default() },
            remaining_points: 1,
        });
    }

    state.used_instructions.push(instruction.id.clone());
    state.coach_budget_remaining -= 1;
    state.last_intervention_point = state.current_point_number as i64;

    debug!(
        "instruction {} {} (budget left {})",
        instruction.id,
        if success { "succeeded" } else { "failed" },
        state.coach_budget_remaining
    );

    let message = if success {
        format!("{} works! The player responds to the call.", instruction.name)
    } else {
        format!("{} fails... the player looks unsettled.", instruction.name)
    };

    InstructionResult { instruction_id: instruction.id.clone(), success, message }
}

/// Tick down every active effect by one point and drop expired entries.
/// Called exactly once per completed point.
pub fn decay_effects(state: &mut MatchState) {
    for effect in &mut state.active_instruction_effects {
        effect.remaining_points -= 1;
    }
    state.active_instruction_effects.retain(|effect| effect.remaining_points > 0);
}

/// Sum every active instruction effect into one bundle. The flag reports
/// whether any instruction is influencing the current point.
pub fn aggregate_instruction_effects(state: &MatchState) -> (EffectBundle, bool) {
    let mut total = EffectBundle::default();
    let mut influenced = false;

    for effect in &state.active_instruction_effects {
        influenced = true;
        total.add(&effect.effects);
    }

    (total, influenced)
}
