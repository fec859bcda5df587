//! Static special-ability catalog. Read-only input data for the core; the
//! simulation never mutates it.

use once_cell::sync::Lazy;
use rand::Rng;

use super::{
    AbilityCategory, AbilityRarity, EffectBundle, SituationalBonuses, SpecialAbility,
};

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: AbilityCategory,
    rarity: AbilityRarity,
    effects: EffectBundle,
    situational: SituationalBonuses,
) -> SpecialAbility {
    SpecialAbility {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        rarity,
        effects,
        situational,
        is_active: true,
    }
}

static ABILITY_CATALOG: Lazy<Vec<SpecialAbility>> = Lazy::new(|| {
    vec![
        // Serve
        entry(
            "power_serve",
            "Power Serve",
            "Heavy first serve that is hard to handle",
            AbilityCategory::Serve,
            AbilityRarity::Common,
            EffectBundle { serve: 15.0, critical_rate: 8.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "ace_master",
            "Ace Master",
            "Finds the lines on serve",
            AbilityCategory::Serve,
            AbilityRarity::Rare,
            EffectBundle {
                serve: 12.0,
                critical_rate: 15.0,
                success_rate: 10.0,
                ..Default::default()
            },
            SituationalBonuses::default(),
        ),
        entry(
            "clutch_serve",
            "Clutch Serve",
            "Serves biggest on the biggest points",
            AbilityCategory::Serve,
            AbilityRarity::Epic,
            EffectBundle { serve: 8.0, ..Default::default() },
            SituationalBonuses {
                break_point: 20.0,
                set_point: 15.0,
                match_point: 25.0,
                ..Default::default()
            },
        ),
        // Receive
        entry(
            "return_specialist",
            "Return Specialist",
            "Puts every return back in play",
            AbilityCategory::Receive,
            AbilityRarity::Common,
            EffectBundle { receive: 12.0, error_reduction: 10.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "break_hunter",
            "Break Hunter",
            "Sharpest on break chances",
            AbilityCategory::Receive,
            AbilityRarity::Rare,
            EffectBundle { receive: 8.0, success_rate: 5.0, ..Default::default() },
            SituationalBonuses { break_point: 18.0, ..Default::default() },
        ),
        entry(
            "counter_puncher",
            "Counter Puncher",
            "Turns defense into offense when trailing",
            AbilityCategory::Receive,
            AbilityRarity::Epic,
            EffectBundle { receive: 10.0, critical_rate: 12.0, ..Default::default() },
            SituationalBonuses { behind: 20.0, ..Default::default() },
        ),
        // Volley
        entry(
            "net_master",
            "Net Master",
            "At home at the net",
            AbilityCategory::Volley,
            AbilityRarity::Common,
            EffectBundle { volley: 15.0, critical_rate: 6.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "volley_artist",
            "Volley Artist",
            "Finishes points with touch volleys",
            AbilityCategory::Volley,
            AbilityRarity::Rare,
            EffectBundle {
                volley: 12.0,
                critical_rate: 18.0,
                success_rate: 8.0,
                ..Default::default()
            },
            SituationalBonuses::default(),
        ),
        entry(
            "pressure_volley",
            "Pressure Volley",
            "Closes the net fearlessly when it matters",
            AbilityCategory::Volley,
            AbilityRarity::Epic,
            EffectBundle { volley: 10.0, critical_rate: 10.0, ..Default::default() },
            SituationalBonuses { tiebreak: 15.0, set_point: 12.0, ..Default::default() },
        ),
        // Stroke
        entry(
            "baseline_power",
            "Baseline Power",
            "Hits through opponents from the back of the court",
            AbilityCategory::Stroke,
            AbilityRarity::Common,
            EffectBundle { stroke: 12.0, critical_rate: 8.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "rally_master",
            "Rally Master",
            "Outlasts anyone in long exchanges",
            AbilityCategory::Stroke,
            AbilityRarity::Rare,
            EffectBundle {
                stroke: 10.0,
                stamina: 8.0,
                error_reduction: 12.0,
                ..Default::default()
            },
            SituationalBonuses::default(),
        ),
        entry(
            "winner_machine",
            "Winner Machine",
            "Produces clean winners off the ground",
            AbilityCategory::Stroke,
            AbilityRarity::Epic,
            EffectBundle {
                stroke: 15.0,
                critical_rate: 20.0,
                success_rate: 6.0,
                ..Default::default()
            },
            SituationalBonuses::default(),
        ),
        // Mental
        entry(
            "mental_strength",
            "Mental Strength",
            "Unbothered by pressure",
            AbilityCategory::Mental,
            AbilityRarity::Common,
            EffectBundle { mental: 15.0, error_reduction: 8.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "clutch_player",
            "Clutch Player",
            "Raises their level on important points",
            AbilityCategory::Mental,
            AbilityRarity::Rare,
            EffectBundle { mental: 10.0, ..Default::default() },
            SituationalBonuses {
                break_point: 12.0,
                set_point: 15.0,
                match_point: 20.0,
                ..Default::default()
            },
        ),
        entry(
            "ice_cold",
            "Ice Cold",
            "Total calm in the decisive moments",
            AbilityCategory::Mental,
            AbilityRarity::Legendary,
            EffectBundle { mental: 20.0, error_reduction: 20.0, ..Default::default() },
            SituationalBonuses { tiebreak: 25.0, match_point: 30.0, ..Default::default() },
        ),
        // Stamina
        entry(
            "endurance",
            "Endurance",
            "Barely tires over a long match",
            AbilityCategory::Stamina,
            AbilityRarity::Common,
            EffectBundle { stamina: 20.0, ..Default::default() },
            SituationalBonuses::default(),
        ),
        entry(
            "second_wind",
            "Second Wind",
            "Recovers when the match turns against them",
            AbilityCategory::Stamina,
            AbilityRarity::Rare,
            EffectBundle { stamina: 15.0, ..Default::default() },
            SituationalBonuses { behind: 8.0, ..Default::default() },
        ),
        entry(
            "iron_will",
            "Iron Will",
            "Refuses to go away at the end of a match",
            AbilityCategory::Stamina,
            AbilityRarity::Epic,
            EffectBundle { stamina: 25.0, mental: 10.0, ..Default::default() },
            SituationalBonuses { match_point: 15.0, ..Default::default() },
        ),
    ]
});

/// Full catalog, in display order.
pub fn ability_catalog() -> &'static [SpecialAbility] {
    &ABILITY_CATALOG
}

/// Draw `count` distinct abilities, weighted by rarity.
pub fn random_abilities(count: usize, rng: &mut impl Rng) -> Vec<SpecialAbility> {
    let mut pool: Vec<&SpecialAbility> = ABILITY_CATALOG.iter().collect();
    let mut selected = Vec::with_capacity(count);

    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let total_weight: u32 = pool.iter().map(|a| a.rarity.draw_weight()).sum();
        let mut ticket = rng.gen_range(0..total_weight);
        let mut chosen = pool.len() - 1;
        for (idx, ability) in pool.iter().enumerate() {
            let weight = ability.rarity.draw_weight();
            if ticket < weight {
                chosen = idx;
                break;
            }
            ticket -= weight;
        }
        selected.push(pool.remove(chosen).clone());
    }

    selected
}
