//! Savings goals

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::GoalId;
use crate::error::PlanningError;

/// What a goal is saving for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GoalCategory {
    #[default]
    General,
    Emergency,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Education,
    Retirement,
    Travel,
    Investment,
}

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub description: String,
    pub category: GoalCategory,
}

impl Goal {
    /// Creates a validated goal
    ///
    /// # Errors
    ///
    /// `InvalidGoal` if the target is not positive or the saved amount is negative
    pub fn new(
        title: impl Into<String>,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: NaiveDate,
        category: GoalCategory,
    ) -> Result<Self, PlanningError> {
        let goal = Self {
            id: GoalId::new_v7(),
            title: title.into(),
            target_amount,
            current_amount,
            target_date,
            description: String::new(),
            category,
        };
        goal.validate()?;
        Ok(goal)
    }

    pub fn with_id(mut self, id: GoalId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.target_amount <= Decimal::ZERO {
            return Err(PlanningError::invalid_goal(format!(
                "target amount must be positive, got {}",
                self.target_amount
            )));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(PlanningError::invalid_goal(format!(
                "current amount must not be negative, got {}",
                self.current_amount
            )));
        }
        Ok(())
    }

    /// Saved share of the target, capped at 100
    pub fn progress_percent(&self) -> Decimal {
        if self.is_achieved() {
            return dec!(100);
        }
        self.current_amount
            .checked_div(self.target_amount)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or(Decimal::ZERO)
    }

    /// Amount still to save, never negative
    pub fn remaining_amount(&self) -> Decimal {
        self.target_amount
            .saturating_sub(self.current_amount)
            .max(Decimal::ZERO)
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days from `today` until the target date; negative once it has passed
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }
}

/// The user's goals in creation order
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalBook {
    goals: Vec<Goal>,
}

impl GoalBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Adds a goal
    ///
    /// # Errors
    ///
    /// `InvalidGoal` or `DuplicateGoal`
    pub fn add(&mut self, goal: Goal) -> Result<(), PlanningError> {
        goal.validate()?;
        if self.get(goal.id).is_some() {
            return Err(PlanningError::DuplicateGoal(goal.id));
        }
        debug!(goal_id = %goal.id, title = %goal.title, "Added goal");
        self.goals.push(goal);
        Ok(())
    }

    /// Replaces the goal with the same identifier, returning the previous one
    ///
    /// # Errors
    ///
    /// `InvalidGoal` or `GoalNotFound`
    pub fn update(&mut self, goal: Goal) -> Result<Goal, PlanningError> {
        goal.validate()?;
        let slot = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or(PlanningError::GoalNotFound(goal.id))?;
        debug!(goal_id = %goal.id, "Updated goal");
        Ok(std::mem::replace(slot, goal))
    }

    /// Removes a goal
    ///
    /// # Errors
    ///
    /// `GoalNotFound`
    pub fn remove(&mut self, id: GoalId) -> Result<Goal, PlanningError> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(PlanningError::GoalNotFound(id))?;
        debug!(goal_id = %id, "Removed goal");
        Ok(self.goals.remove(index))
    }
}
