use serde::{Deserialize, Serialize};

use crate::special_ability::SpecialAbility;

/// Lower/upper bound of every base attribute.
pub const STAT_MIN: f32 = 10.0;
pub const STAT_MAX: f32 = 100.0;

/// Six base attributes, each in [10, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub serve: f32,
    pub receive: f32,
    pub volley: f32,
    pub stroke: f32,
    pub mental: f32,
    pub stamina: f32,
}

impl PlayerStats {
    pub fn clamped(self) -> PlayerStats {
        PlayerStats {
            serve: self.serve.clamp(STAT_MIN, STAT_MAX),
            receive: self.receive.clamp(STAT_MIN, STAT_MAX),
            volley: self.volley.clamp(STAT_MIN, STAT_MAX),
            stroke: self.stroke.clamp(STAT_MIN, STAT_MAX),
            mental: self.mental.clamp(STAT_MIN, STAT_MAX),
            stamina: self.stamina.clamp(STAT_MIN, STAT_MAX),
        }
    }
}

/// A tennis player owned by the match for its lifetime. The two runtime
/// gauges are mutated every point and only reset at match initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TennisPlayer {
    pub id: String,
    pub name: String,
    pub stats: PlayerStats,
    /// Runtime stamina gauge, clamped [0, 100].
    pub current_stamina: f32,
    /// Runtime mental gauge, clamped [0, 100].
    pub current_mental: f32,
    pub special_abilities: Vec<SpecialAbility>,
}

impl TennisPlayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: PlayerStats,
        special_abilities: Vec<SpecialAbility>,
    ) -> TennisPlayer {
        let stats = stats.clamped();
        TennisPlayer {
            id: id.into(),
            name: name.into(),
            current_stamina: stats.stamina,
            current_mental: stats.mental,
            stats,
            special_abilities,
        }
    }

    /// Remaining stamina as a fraction of the base attribute.
    pub fn stamina_fraction(&self) -> f32 {
        if self.stats.stamina <= 0.0 {
            0.0
        } else {
            self.current_stamina / self.stats.stamina
        }
    }

    pub fn drain_stamina(&mut self, amount: f32) {
        self.current_stamina = (self.current_stamina - amount).clamp(0.0, 100.0);
    }

    pub fn adjust_mental(&mut self, delta: f32) {
        self.current_mental = (self.current_mental + delta).clamp(0.0, 100.0);
    }
}
