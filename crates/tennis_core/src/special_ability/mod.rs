//! Special abilities: passive, always-equipped bonuses a player carries into
//! the match, plus the aggregation that folds them into scalar modifiers for
//! the point resolver.

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::engine::situation::SituationFlags;

pub use catalog::{ability_catalog, random_abilities};

/// Which part of the game an ability improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Serve,
    Receive,
    Volley,
    Stroke,
    Mental,
    Stamina,
}

/// Ability rarity. Draw weights: 50 / 30 / 15 / 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl AbilityRarity {
    pub fn draw_weight(&self) -> u32 {
        match self {
            AbilityRarity::Common => 50,
            AbilityRarity::Rare => 30,
            AbilityRarity::Epic => 15,
            AbilityRarity::Legendary => 5,
        }
    }

    /// Flat contribution to a player's overall rating.
    pub fn rating_bonus(&self) -> f32 {
        match self {
            AbilityRarity::Common => 1.0,
            AbilityRarity::Rare => 2.0,
            AbilityRarity::Epic => 4.0,
            AbilityRarity::Legendary => 8.0,
        }
    }
}

/// Structured bonus record shared by abilities and coach instructions.
/// Attribute fields are additive rating points; the three rate fields are in
/// percent and scaled by the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectBundle {
    pub serve: f32,
    pub receive: f32,
    pub volley: f32,
    pub stroke: f32,
    pub mental: f32,
    pub stamina: f32,
    pub critical_rate: f32,
    pub error_reduction: f32,
    pub success_rate: f32,
}

impl EffectBundle {
    pub fn add(&mut self, other: &EffectBundle) {
        self.serve += other.serve;
        self.receive += other.receive;
        self.volley += other.volley;
        self.stroke += other.stroke;
        self.mental += other.mental;
        self.stamina += other.stamina;
        self.critical_rate += other.critical_rate;
        self.error_reduction += other.error_reduction;
        self.success_rate += other.success_rate;
    }

    pub fn scaled(&self, multiplier: f32) -> EffectBundle {
        EffectBundle {
            serve: self.serve * multiplier,
            receive: self.receive * multiplier,
            volley: self.volley * multiplier,
            stroke: self.stroke * multiplier,
            mental: self.mental * multiplier,
            stamina: self.stamina * multiplier,
            critical_rate: self.critical_rate * multiplier,
            error_reduction: self.error_reduction * multiplier,
            success_rate: self.success_rate * multiplier,
        }
    }
}

/// Extra success-rate bonuses that only apply when the matching situation
/// flag is set for the owning player's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SituationalBonuses {
    pub break_point: f32,
    pub set_point: f32,
    pub match_point: f32,
    pub tiebreak: f32,
    pub behind: f32,
    pub ahead: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AbilityCategory,
    pub rarity: AbilityRarity,
    pub effects: EffectBundle,
    pub situational: SituationalBonuses,
    pub is_active: bool,
}

/// Fold every active ability into one bundle. Flat bonuses always count;
/// situational bonuses land in `success_rate` when their flag is set.
/// Pure: no randomness, no mutation, called fresh each point.
pub fn aggregate_ability_effects(
    abilities: &[SpecialAbility],
    flags: &SituationFlags,
) -> EffectBundle {
    let mut total = EffectBundle::default();

    for ability in abilities {
        if !ability.is_active {
            continue;
        }
        total.add(&ability.effects);

        let situational = &ability.situational;
        if flags.break_point {
            total.success_rate += situational.break_point;
        }
        if flags.set_point {
            total.success_rate += situational.set_point;
        }
        if flags.match_point {
            total.success_rate += situational.match_point;
        }
        if flags.tiebreak {
            total.success_rate += situational.tiebreak;
        }
        if flags.behind {
            total.success_rate += situational.behind;
        }
        if flags.ahead {
            total.success_rate += situational.ahead;
        }
    }

    total
}
