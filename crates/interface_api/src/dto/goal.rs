//! Goal DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_amount, format_percent, Currency, GoalId};
use domain_planning::{Goal, GoalCategory, PlanningError};

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub title: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: GoalCategory,
}

impl GoalRequest {
    /// Validates the request into a goal, keeping `id` when given
    pub fn into_goal(self, id: Option<GoalId>) -> Result<Goal, PlanningError> {
        let goal = Goal::new(
            self.title,
            self.target_amount,
            self.current_amount,
            self.target_date,
            self.category,
        )?
        .with_description(self.description);

        Ok(match id {
            Some(id) => goal.with_id(id),
            None => goal,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct GoalDisplay {
    pub target_amount: String,
    pub current_amount: String,
    pub remaining_amount: String,
    pub progress: String,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress_percent: Decimal,
    pub remaining_amount: Decimal,
    pub days_remaining: i64,
    pub is_achieved: bool,
    pub display: GoalDisplay,
}

impl GoalResponse {
    pub fn from_goal(goal: &Goal, today: NaiveDate, currency: Currency) -> Self {
        let progress_percent = goal.progress_percent();
        let remaining_amount = goal.remaining_amount();
        Self {
            progress_percent,
            remaining_amount,
            days_remaining: goal.days_remaining(today),
            is_achieved: goal.is_achieved(),
            display: GoalDisplay {
                target_amount: format_amount(goal.target_amount, currency),
                current_amount: format_amount(goal.current_amount, currency),
                remaining_amount: format_amount(remaining_amount, currency),
                progress: format_percent(progress_percent, 1),
            },
            goal: goal.clone(),
        }
    }
}
