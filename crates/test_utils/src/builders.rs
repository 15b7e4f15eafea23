//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{GoalId, HoldingId};
use domain_planning::{Goal, GoalCategory};
use domain_portfolio::{Holding, HoldingCategory};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

/// Builder for holdings
pub struct HoldingBuilder {
    id: HoldingId,
    name: String,
    symbol: String,
    category: HoldingCategory,
    cost_basis: Decimal,
    units: Decimal,
    unit_price: Decimal,
    acquired_on: NaiveDate,
    current_value: Option<Decimal>,
}

impl Default for HoldingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldingBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: HoldingId::new_v7(),
            name: "Test Holding".to_string(),
            symbol: "TEST".to_string(),
            category: HoldingCategory::Equity,
            cost_basis: dec!(10000),
            units: dec!(10),
            unit_price: dec!(1000),
            acquired_on: DateFixtures::acquired(),
            current_value: None,
        }
    }

    pub fn with_id(mut self, id: HoldingId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_category(mut self, category: HoldingCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the cost basis; the current value follows it unless set explicitly
    pub fn with_cost_basis(mut self, cost_basis: Decimal) -> Self {
        self.cost_basis = cost_basis;
        self
    }

    pub fn with_units(mut self, units: Decimal, unit_price: Decimal) -> Self {
        self.units = units;
        self.unit_price = unit_price;
        self
    }

    pub fn with_acquired_on(mut self, date: NaiveDate) -> Self {
        self.acquired_on = date;
        self
    }

    pub fn with_current_value(mut self, value: Decimal) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Builds the holding
    pub fn build(self) -> Holding {
        let holding = Holding::new(
            self.name,
            self.symbol,
            self.category,
            self.cost_basis,
            self.units,
            self.unit_price,
            self.acquired_on,
        )
        .with_id(self.id);

        match self.current_value {
            Some(value) => holding.with_current_value(value),
            None => holding,
        }
    }
}

/// Builder for goals
///
/// `build` goes through `Goal::new`; to get an invalid goal, build a valid
/// one and edit its public fields.
pub struct GoalBuilder {
    id: GoalId,
    title: String,
    target_amount: Decimal,
    current_amount: Decimal,
    target_date: NaiveDate,
    description: String,
    category: GoalCategory,
}

impl Default for GoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: GoalId::new_v7(),
            title: "Test Goal".to_string(),
            target_amount: dec!(100000),
            current_amount: Decimal::ZERO,
            target_date: DateFixtures::goal_deadline(),
            description: String::new(),
            category: GoalCategory::General,
        }
    }

    pub fn with_id(mut self, id: GoalId) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_amounts(mut self, target: Decimal, current: Decimal) -> Self {
        self.target_amount = target;
        self.current_amount = current;
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = category;
        self
    }

    /// Builds the goal
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not form a valid goal
    pub fn build(self) -> Goal {
        Goal::new(
            self.title,
            self.target_amount,
            self.current_amount,
            self.target_date,
            self.category,
        )
        .unwrap()
        .with_id(self.id)
        .with_description(self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_builder_defaults() {
        let holding = HoldingBuilder::new().build();

        assert_eq!(holding.cost_basis, dec!(10000));
        assert_eq!(holding.current_value, holding.cost_basis);
        assert_eq!(holding.gain_loss(), Decimal::ZERO);
    }

    #[test]
    fn test_holding_builder_customization() {
        let id = HoldingId::new();
        let holding = HoldingBuilder::new()
            .with_id(id)
            .with_category(HoldingCategory::Bond)
            .with_cost_basis(dec!(20000))
            .with_current_value(dec!(25000))
            .build();

        assert_eq!(holding.id(), id);
        assert_eq!(holding.category, HoldingCategory::Bond);
        assert_eq!(holding.gain_loss_percent(), dec!(25));
    }

    #[test]
    fn test_goal_builder() {
        let goal = GoalBuilder::new()
            .with_title("Europe Trip")
            .with_amounts(dec!(300000), dec!(75000))
            .with_category(GoalCategory::Travel)
            .build();

        assert_eq!(goal.title, "Europe Trip");
        assert_eq!(goal.progress_percent(), dec!(25));
    }

    #[test]
    #[should_panic]
    fn test_goal_builder_rejects_zero_target() {
        GoalBuilder::new().with_amounts(Decimal::ZERO, Decimal::ZERO).build();
    }
}
