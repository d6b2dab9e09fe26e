//! Planner-specific error types

use chrono::NaiveDate;
use shared::SharedError;
use thiserror::Error;

/// Caller supplied invalid input; nothing was stored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player names list cannot be empty")]
    EmptyRoster,

    #[error("Player name at position {position} is blank")]
    BlankPlayerName { position: usize },

    #[error("Duplicate player name: {name}")]
    DuplicatePlayer { name: String },

    #[error("Number of rounds must be between 1 and {max}, got {requested}")]
    InvalidRoundCount { requested: i64, max: u32 },

    #[error("Roster has {size} players, at most {max} are supported")]
    RosterTooLarge { size: usize, max: usize },

    #[error("Start date {start_date} puts later rounds outside the supported calendar range")]
    StartDateOutOfRange { start_date: NaiveDate },
}

/// A read-side view was requested that has nothing to show
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("No schedule has been generated yet")]
    NoScheduleYet,
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("Round {round} violates schedule invariant: {reason}")]
    InvariantViolation { round: u32, reason: String },

    #[error("Export archive failed for {path}: {source}")]
    ArchiveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl PlannerError {
    pub fn invariant(round: u32, reason: impl Into<String>) -> Self {
        PlannerError::InvariantViolation {
            round,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, PlannerError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PlannerError::NotFound(_))
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::EmptyRoster.to_string(),
            "Player names list cannot be empty"
        );
        assert_eq!(
            ValidationError::DuplicatePlayer { name: "Alex".into() }.to_string(),
            "Duplicate player name: Alex"
        );
        assert_eq!(
            ValidationError::InvalidRoundCount { requested: 0, max: 1000 }.to_string(),
            "Number of rounds must be between 1 and 1000, got 0"
        );
    }

    #[test]
    fn test_error_classification() {
        let validation: PlannerError = ValidationError::EmptyRoster.into();
        let not_found: PlannerError = NotFoundError::NoScheduleYet.into();
        let invariant = PlannerError::invariant(3, "player listed twice");

        assert!(validation.is_validation());
        assert!(!validation.is_not_found());
        assert!(not_found.is_not_found());
        assert!(!invariant.is_validation() && !invariant.is_not_found());
        assert_eq!(
            invariant.to_string(),
            "Round 3 violates schedule invariant: player listed twice"
        );
    }
}
