//! Planning domain errors

use thiserror::Error;

use core_kernel::GoalId;

/// Errors that can occur in the planning domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Saved plan not found at index {0}")]
    PlanNotFound(usize),

    #[error("Goal not found: {0}")]
    GoalNotFound(GoalId),

    #[error("Duplicate goal identifier: {0}")]
    DuplicateGoal(GoalId),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
}

impl PlanningError {
    /// Creates an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        PlanningError::InvalidParameter(message.into())
    }

    /// Creates an invalid goal error
    pub fn invalid_goal(message: impl Into<String>) -> Self {
        PlanningError::InvalidGoal(message.into())
    }
}
