//! Core data model: players, configuration, score encodings and point results.

pub mod config;
pub mod player;
pub mod point;
pub mod score;

pub use config::MatchConfig;
pub use player::{PlayerStats, TennisPlayer, STAT_MAX, STAT_MIN};
pub use point::{MatchSummary, PointResult, PointWinReason};
pub use score::{GameScore, PointScore, SetScore, TeamSide};
