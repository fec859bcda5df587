//! # tennis_core - Deterministic Tennis Match Simulation Engine
//!
//! This library simulates a full two-player tennis match one point at a
//! time, with a coach intervention system layered on top: the engine
//! pauses at tactically significant moments and lets the caller issue a
//! coaching instruction before play continues.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Full scoring state machine: games, deuce/advantage, tiebreaks, sets
//! - Stat-driven point resolution with special abilities
//! - Coach instructions with per-point decaying effects
//!
//! ## Quick start
//! ```
//! use tennis_core::{initialize_match, MatchConfig, MatchEngine, PointOutcome};
//! use tennis_core::player::generate_pair;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let (home, away) = generate_pair(&mut rng);
//! let mut state = initialize_match(home, away, MatchConfig::default()).unwrap();
//! let mut engine = MatchEngine::from_seed(42);
//!
//! while !state.is_match_complete {
//!     match engine.advance_point(&mut state).unwrap() {
//!         PointOutcome::Point(_) => {}
//!         PointOutcome::AwaitingDecision(_) => {
//!             // no coach on the bench today
//!             engine.resolve_intervention(&mut state, None).unwrap();
//!         }
//!     }
//! }
//! assert!(state.winner.is_some());
//! ```

pub mod coach;
pub mod engine;
pub mod error;
pub mod models;
pub mod player;
pub mod special_ability;

pub use coach::{generate_instruction_choices, instruction_catalog, CoachInstruction};
pub use engine::{
    initialize_match, match_summary, InterventionKind, InterventionOpportunity,
    InterventionSituation, MatchEngine, MatchState, PointOutcome,
};
pub use error::{MatchError, Result};
pub use models::{
    GameScore, MatchConfig, MatchSummary, PlayerStats, PointResult, PointScore, PointWinReason,
    SetScore, TeamSide, TennisPlayer,
};
pub use special_ability::{ability_catalog, SpecialAbility};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
