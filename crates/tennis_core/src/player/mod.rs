//! Random player generation. Players come out of an archetype that skews
//! the stat spread, plus a small randomized ability loadout, so generated
//! opponents play noticeably differently at the same level.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{PlayerStats, TennisPlayer, STAT_MAX, STAT_MIN};
use crate::special_ability::random_abilities;

/// Stat leaning applied on top of the rolled base values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerArchetype {
    /// Serve and stroke heavy, weaker returns.
    Power,
    /// Net play and composure, thin on stamina.
    Technical,
    /// Return and stamina heavy, modest serve.
    Defensive,
    /// Slight bump everywhere.
    Balanced,
    /// Composure and stamina, little raw power.
    Mental,
}

impl PlayerArchetype {
    pub const ALL: [PlayerArchetype; 5] = [
        PlayerArchetype::Power,
        PlayerArchetype::Technical,
        PlayerArchetype::Defensive,
        PlayerArchetype::Balanced,
        PlayerArchetype::Mental,
    ];

    /// Additive modifiers in stat order: serve, receive, volley, stroke,
    /// mental, stamina.
    fn modifiers(self) -> [f32; 6] {
        match self {
            PlayerArchetype::Power => [15.0, -8.0, -5.0, 12.0, -5.0, 5.0],
            PlayerArchetype::Technical => [5.0, 8.0, 15.0, 8.0, 12.0, -10.0],
            PlayerArchetype::Defensive => [-8.0, 15.0, -5.0, 5.0, 8.0, 12.0],
            PlayerArchetype::Balanced => [2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
            PlayerArchetype::Mental => [-5.0, 5.0, 3.0, 3.0, 15.0, 10.0],
        }
    }
}

/// Smallest and largest ability loadout a generated player carries.
const MIN_ABILITIES: usize = 2;
const MAX_ABILITIES: usize = 4;
/// Each base stat is rolled within level plus or minus this spread.
const LEVEL_SPREAD: f32 = 10.0;

fn roll_stat(level: f32, rng: &mut impl Rng) -> f32 {
    let value = level + (rng.gen::<f32>() - 0.5) * 2.0 * LEVEL_SPREAD;
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Generate a player around the given level with a random archetype.
pub fn generate_player(id: &str, name: &str, level: f32, rng: &mut impl Rng) -> TennisPlayer {
    let archetype = PlayerArchetype::ALL[rng.gen_range(0..PlayerArchetype::ALL.len())];
    generate_player_with_archetype(id, name, level, archetype, rng)
}

pub fn generate_player_with_archetype(
    id: &str,
    name: &str,
    level: f32,
    archetype: PlayerArchetype,
    rng: &mut impl Rng,
) -> TennisPlayer {
    let [serve_mod, receive_mod, volley_mod, stroke_mod, mental_mod, stamina_mod] =
        archetype.modifiers();
    let stats = PlayerStats {
        serve: roll_stat(level, rng) + serve_mod,
        receive: roll_stat(level, rng) + receive_mod,
        volley: roll_stat(level, rng) + volley_mod,
        stroke: roll_stat(level, rng) + stroke_mod,
        mental: roll_stat(level, rng) + mental_mod,
        stamina: roll_stat(level, rng) + stamina_mod,
    }
    .clamped();

    let ability_count = rng.gen_range(MIN_ABILITIES..=MAX_ABILITIES);
    let abilities = random_abilities(ability_count, rng);

    TennisPlayer::new(id, name, stats, abilities)
}

/// A ready-to-play pairing: the home side is rolled slightly stronger than
/// the away side.
pub fn generate_pair(rng: &mut impl Rng) -> (TennisPlayer, TennisPlayer) {
    let home = generate_player("home", "Ace", 75.0, rng);
    let away = generate_player("away", "Rival", 73.0, rng);
    (home, away)
}

/// Single-number strength estimate: mean of the six stats plus ability
/// bonuses, capped at 100.
pub fn overall_rating(player: &TennisPlayer) -> f32 {
    let stats = &player.stats;
    let base = (stats.serve
        + stats.receive
        + stats.volley
        + stats.stroke
        + stats.mental
        + stats.stamina)
        / 6.0;

    let count_bonus = player.special_abilities.len() as f32 * 2.0;
    let rarity_bonus: f32 = player
        .special_abilities
        .iter()
        .map(|ability| ability.rarity.rating_bonus())
        .sum();

    (base + count_bonus + rarity_bonus).min(100.0)
}
