//! Static instruction catalog and situation-weighted candidate generation.
//! Candidate generation is collaborator-facing: the core itself only consumes
//! the chosen instruction.

use once_cell::sync::Lazy;
use rand::Rng;

use super::{
    CoachInstruction, InstructionCategory, InstructionEffectiveness, InstructionEffects,
};
use crate::engine::intervention::{InterventionOpportunity, InterventionSituation};
use crate::special_ability::EffectBundle;

/// Number of candidates offered per intervention.
pub const INSTRUCTION_CHOICES: usize = 5;

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: InstructionCategory,
    effectiveness: InstructionEffectiveness,
    effects: InstructionEffects,
    success_rate: f32,
    success_multiplier: f32,
    failure_penalty: f32,
) -> CoachInstruction {
    CoachInstruction {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        effectiveness,
        effects,
        success_rate,
        success_multiplier,
        failure_penalty,
    }
}

static INSTRUCTION_CATALOG: Lazy<Vec<CoachInstruction>> = Lazy::new(|| {
    vec![
        entry(
            "serve_and_volley",
            "Serve & Volley",
            "Follow the serve to the net and finish early",
            InstructionCategory::Offensive,
            InstructionEffectiveness::Advanced,
            InstructionEffects {
                bundle: EffectBundle {
                    serve: 15.0,
                    volley: 10.0,
                    critical_rate: 8.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![],
            },
            0.65,
            1.2,
            -3.0,
        ),
        entry(
            "power_baseline",
            "Power Baseline",
            "Attack relentlessly from the back of the court",
            InstructionCategory::Offensive,
            InstructionEffectiveness::Basic,
            InstructionEffects {
                bundle: EffectBundle { stroke: 12.0, success_rate: 5.0, ..Default::default() },
                duration: 2,
                requirements: vec![],
            },
            0.80,
            1.0,
            -2.0,
        ),
        entry(
            "defensive_wall",
            "Defensive Wall",
            "Keep every ball in play and force the error",
            InstructionCategory::Defensive,
            InstructionEffectiveness::Basic,
            InstructionEffects {
                bundle: EffectBundle {
                    receive: 15.0,
                    volley: 8.0,
                    error_reduction: 20.0,
                    ..Default::default()
                },
                duration: 2,
                requirements: vec![],
            },
            0.85,
            1.0,
            -1.0,
        ),
        entry(
            "patience_game",
            "Patience Game",
            "Wait out the opponent and pick the right ball",
            InstructionCategory::Defensive,
            InstructionEffectiveness::Advanced,
            InstructionEffects {
                bundle: EffectBundle {
                    receive: 10.0,
                    stroke: 8.0,
                    mental: 5.0,
                    ..Default::default()
                },
                duration: 2,
                requirements: vec![],
            },
            0.70,
            1.1,
            -2.0,
        ),
        entry(
            "mental_reset",
            "Mental Reset",
            "Breathe, slow down, settle the nerves",
            InstructionCategory::Mental,
            InstructionEffectiveness::Basic,
            InstructionEffects {
                bundle: EffectBundle {
                    mental: 12.0,
                    error_reduction: 15.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![],
            },
            0.90,
            1.0,
            0.0,
        ),
        entry(
            "fighting_spirit",
            "Fighting Spirit",
            "Play on raw fire. Risky, but it can swing a match",
            InstructionCategory::Mental,
            InstructionEffectiveness::Risky,
            InstructionEffects {
                bundle: EffectBundle {
                    serve: 10.0,
                    stroke: 10.0,
                    mental: 8.0,
                    critical_rate: 15.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![],
            },
            0.50,
            1.5,
            -5.0,
        ),
        entry(
            "tempo_change",
            "Tempo Change",
            "Break the rhythm and make the opponent think",
            InstructionCategory::Tactical,
            InstructionEffectiveness::Advanced,
            InstructionEffects {
                bundle: EffectBundle { success_rate: 6.0, ..Default::default() },
                duration: 2,
                requirements: vec![],
            },
            0.75,
            1.1,
            -2.0,
        ),
        entry(
            "target_weakness",
            "Target the Weakness",
            "Hammer the opponent's weaker wing",
            InstructionCategory::Tactical,
            InstructionEffectiveness::Advanced,
            InstructionEffects {
                bundle: EffectBundle {
                    stroke: 8.0,
                    volley: 8.0,
                    critical_rate: 12.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![],
            },
            0.60,
            1.3,
            -3.0,
        ),
        entry(
            "miracle_shot",
            "Miracle Shot",
            "Swing for the impossible",
            InstructionCategory::Emergency,
            InstructionEffectiveness::Emergency,
            InstructionEffects {
                bundle: EffectBundle {
                    serve: 20.0,
                    stroke: 20.0,
                    critical_rate: 25.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![],
            },
            0.40,
            2.0,
            -8.0,
        ),
        entry(
            "last_stand",
            "Last Stand",
            "Everything on one point. Only with the back against the wall",
            InstructionCategory::Emergency,
            InstructionEffectiveness::Emergency,
            InstructionEffects {
                bundle: EffectBundle {
                    serve: 15.0,
                    receive: 15.0,
                    volley: 15.0,
                    stroke: 15.0,
                    mental: 10.0,
                    ..Default::default()
                },
                duration: 1,
                requirements: vec![
                    InterventionSituation::MatchPointAgainst,
                    InterventionSituation::SetPointAgainst,
                ],
            },
            0.35,
            2.5,
            -10.0,
        ),
    ]
});

/// Full catalog, in display order.
pub fn instruction_catalog() -> &'static [CoachInstruction] {
    &INSTRUCTION_CATALOG
}

/// Category weight for a situation. Higher weight makes a category more
/// likely to be offered. Unlisted combinations default to 10.
fn situation_weight(situation: InterventionSituation, category: InstructionCategory) -> u32 {
    use InstructionCategory::*;
    use InterventionSituation::*;

    match situation {
        BreakPointAgainst => match category {
            Offensive => 20,
            Defensive => 40,
            Mental => 30,
            Stamina => 10,
            Tactical => 15,
            Emergency => 5,
        },
        BreakPointFor => match category {
            Offensive => 40,
            Defensive => 15,
            Mental => 25,
            Stamina => 5,
            Tactical => 30,
            Emergency => 10,
        },
        SetPointAgainst => match category {
            Offensive => 15,
            Defensive => 35,
            Mental => 40,
            Stamina => 10,
            Tactical => 20,
            Emergency => 15,
        },
        SetPointFor => match category {
            Offensive => 35,
            Defensive => 10,
            Mental => 30,
            Stamina => 5,
            Tactical => 25,
            Emergency => 20,
        },
        MatchPointAgainst => match category {
            Offensive => 10,
            Defensive => 25,
            Mental => 30,
            Stamina => 5,
            Tactical => 15,
            Emergency => 40,
        },
        MatchPointFor => match category {
            Offensive => 30,
            Defensive => 5,
            Mental => 35,
            Stamina => 5,
            Tactical => 20,
            Emergency => 25,
        },
        Tiebreak => match category {
            Offensive => 25,
            Defensive => 25,
            Mental => 35,
            Stamina => 15,
            Tactical => 20,
            Emergency => 10,
        },
        MomentumShift => match category {
            Offensive => 30,
            Defensive => 20,
            Mental => 25,
            Stamina => 10,
            Tactical => 35,
            Emergency => 5,
        },
        StaminaLow => match category {
            Offensive => 5,
            Defensive => 25,
            Mental => 20,
            Stamina => 40,
            Tactical => 10,
            Emergency => 15,
        },
        MentalPressure => match category {
            Offensive => 15,
            Defensive => 20,
            Mental => 45,
            Stamina => 15,
            Tactical => 25,
            Emergency => 10,
        },
    }
}

/// Build up to [`INSTRUCTION_CHOICES`] candidates for an opportunity.
/// Used instructions and those whose situation requirements are unmet are
/// filtered out, then candidates are drawn without replacement, weighted by
/// the situation/category table.
pub fn generate_instruction_choices(
    opportunity: &InterventionOpportunity,
    used_instructions: &[String],
    rng: &mut impl Rng,
) -> Vec<CoachInstruction> {
    let mut pool: Vec<(&CoachInstruction, u32)> = INSTRUCTION_CATALOG
        .iter()
        .filter(|instruction| !used_instructions.contains(&instruction.id))
        .filter(|instruction| {
            instruction.effects.requirements.is_empty()
                || instruction.effects.requirements.contains(&opportunity.situation)
        })
        .map(|instruction| {
            (instruction, situation_weight(opportunity.situation, instruction.category))
        })
        .collect();

    let mut selected = Vec::with_capacity(INSTRUCTION_CHOICES);
    while selected.len() < INSTRUCTION_CHOICES && !pool.is_empty() {
        let total_weight: u32 = pool.iter().map(|(_, weight)| weight).sum();
        let mut ticket = rng.gen_range(0..total_weight);
        let mut chosen = pool.len() - 1;
        for (idx, (_, weight)) in pool.iter().enumerate() {
            if ticket < *weight {
                chosen = idx;
                break;
            }
            ticket -= weight;
        }
        let (instruction, _) = pool.remove(chosen);
        selected.push(instruction.clone());
    }

    selected
}
