use serde::{Deserialize, Serialize};

use super::score::{SetScore, TeamSide};

/// Why a point ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointWinReason {
    /// Unreturnable serve.
    Ace,
    /// Serve forced a weak return that was put away.
    ServiceWinner,
    /// Receiver took the point directly off the return.
    ReturnWinner,
    /// Point finished at the net.
    VolleyWinner,
    /// Rally won from the baseline.
    StrokeWinner,
    /// Unforced error by the losing side.
    OpponentError,
    /// The losing side cracked under pressure.
    MentalBreak,
}

/// Outcome of a single resolved point. Produced fresh per point and consumed
/// by the caller; the core keeps no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointResult {
    pub winner: TeamSide,
    pub reason: PointWinReason,
    pub description: String,
    pub was_influenced_by_instruction: bool,

    // Computed rating components, recorded for the caller's display layer.
    pub home_attack: f32,
    pub away_attack: f32,
    pub home_defense: f32,
    pub away_defense: f32,
    /// Server success probability after all modifiers, clamped [0.05, 0.95].
    pub success_rate: f32,
    /// The uniform draw compared against `success_rate`.
    pub roll: f32,
}

/// Aggregate view of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: TeamSide,
    pub sets: Vec<SetScore>,
    pub total_points: u64,
    pub interventions_used: u32,
}
