use crate::types::Stage;

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors raised by the prize registry and stage controller.
///
/// None of these are fatal; every failing operation leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Precondition not met: {0}")]
    Precondition(String),

    #[error(transparent)]
    Guard(#[from] GuardViolation),

    #[error("{0} not found")]
    NotFound(String),

    /// Writing the results file failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl DrawError {
    /// Stable error code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            DrawError::Validation(_) => "VALIDATION_ERROR",
            DrawError::Precondition(_) => "PRECONDITION_FAILED",
            DrawError::Guard(_) => "GUARD_VIOLATION",
            DrawError::NotFound(_) => "NOT_FOUND",
            DrawError::Export(_) => "EXPORT_FAILED",
        }
    }
}

/// A stage transition (or stage-bound operation) whose guard is not satisfied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardViolation {
    #[error("Operation requires stage {expected:?}, current stage is {actual:?}")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("Number of people must be greater than zero")]
    NoPeople,

    #[error("At least one prize must remain active")]
    NoActivePrizes,

    #[error("Number of people ({people}) must be at least the number of active prizes ({active})")]
    TooFewPeople { people: u32, active: usize },

    #[error("{remaining} prize number(s) have not been claimed yet")]
    NotAllSelected { remaining: usize },
}
