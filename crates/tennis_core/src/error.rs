use std::fmt;

use crate::engine::intervention::InterventionSituation;

/// Errors surfaced by the simulation core. All of these are caller errors:
/// the match state is left untouched whenever one is returned.
#[derive(Debug)]
pub enum MatchError {
    /// `advance_point` was called on a completed match.
    MatchComplete,
    /// `advance_point` was called while an intervention decision is outstanding.
    InterventionPending,
    /// `resolve_intervention` was called with no outstanding opportunity.
    NoInterventionPending,
    /// The chosen instruction was already used this match.
    InstructionAlreadyUsed(String),
    /// The chosen instruction requires a situation the pending opportunity
    /// does not provide.
    SituationNotMet {
        instruction: String,
        situation: InterventionSituation,
    },
    /// No coach budget remains for the chosen instruction.
    BudgetExhausted,
    /// The match configuration is invalid.
    InvalidConfig(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::MatchComplete => {
                write!(f, "Match is already complete")
            }
            MatchError::InterventionPending => {
                write!(f, "An intervention decision is still outstanding")
            }
            MatchError::NoInterventionPending => {
                write!(f, "No intervention opportunity is pending")
            }
            MatchError::InstructionAlreadyUsed(id) => {
                write!(f, "Instruction already used this match: {}", id)
            }
            MatchError::SituationNotMet { instruction, situation } => {
                write!(
                    f,
                    "Instruction {} does not apply to situation {:?}",
                    instruction, situation
                )
            }
            MatchError::BudgetExhausted => {
                write!(f, "Coach budget is exhausted")
            }
            MatchError::InvalidConfig(msg) => {
                write!(f, "Invalid match configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for MatchError {}

pub type Result<T> = std::result::Result<T, MatchError>;
