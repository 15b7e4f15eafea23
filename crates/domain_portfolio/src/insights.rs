//! Read-only portfolio insights for the dashboard

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;
use crate::holding::{Holding, HoldingCategory};
use crate::{checked_sum, percent_of};

/// Value held in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: HoldingCategory,
    /// Sum of current values in the category
    pub value: Decimal,
    /// Share of the total portfolio value (0-100)
    pub percent: Decimal,
}

/// Returns the holding with the highest gain/loss percentage
///
/// Ties go to the earliest holding. `None` for an empty slice.
pub fn best_performer(holdings: &[Holding]) -> Option<&Holding> {
    holdings.iter().fold(None, |best: Option<&Holding>, candidate| match best {
        Some(current) if candidate.gain_loss_percent() <= current.gain_loss_percent() => Some(current),
        _ => Some(candidate),
    })
}

/// Counts the distinct categories present
pub fn diversity(holdings: &[Holding]) -> usize {
    holdings
        .iter()
        .map(|h| h.category)
        .collect::<HashSet<_>>()
        .len()
}

/// Splits current value by category, skipping categories with no holdings
///
/// # Errors
///
/// `InvalidHolding` if the total value does not fit in a `Decimal`
pub fn allocation_by_category(holdings: &[Holding]) -> Result<Vec<CategoryAllocation>, PortfolioError> {
    let overflow = || PortfolioError::InvalidHolding("portfolio value exceeds the representable range".to_string());
    let total = checked_sum(holdings.iter().map(|h| h.current_value)).ok_or_else(overflow)?;

    HoldingCategory::ALL
        .iter()
        .filter(|category| holdings.iter().any(|h| h.category == **category))
        .map(|category| {
            let in_category = holdings.iter().filter(|h| h.category == *category);
            let value = checked_sum(in_category.map(|h| h.current_value)).ok_or_else(overflow)?;
            Ok(CategoryAllocation {
                category: *category,
                value,
                percent: percent_of(value, total).ok_or_else(overflow)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn holding(name: &str, category: HoldingCategory, cost: Decimal, value: Decimal) -> Holding {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Holding::new(name, name, category, cost, dec!(1), cost, date).with_current_value(value)
    }

    #[test]
    fn test_best_performer_picks_highest_percent() {
        let holdings = vec![
            holding("A", HoldingCategory::Equity, dec!(100000), dec!(110000)),
            holding("B", HoldingCategory::Fund, dec!(1000), dec!(1200)),
        ];

        assert_eq!(best_performer(&holdings).unwrap().name, "B");
    }

    #[test]
    fn test_best_performer_tie_keeps_first() {
        let holdings = vec![
            holding("First", HoldingCategory::Equity, dec!(100), dec!(110)),
            holding("Second", HoldingCategory::Bond, dec!(200), dec!(220)),
        ];

        assert_eq!(best_performer(&holdings).unwrap().name, "First");
    }

    #[test]
    fn test_best_performer_empty() {
        assert!(best_performer(&[]).is_none());
    }

    #[test]
    fn test_diversity_counts_distinct_categories() {
        let holdings = vec![
            holding("A", HoldingCategory::Equity, dec!(100), dec!(100)),
            holding("B", HoldingCategory::Equity, dec!(100), dec!(100)),
            holding("C", HoldingCategory::Bond, dec!(100), dec!(100)),
        ];

        assert_eq!(diversity(&holdings), 2);
        assert_eq!(diversity(&[]), 0);
    }

    #[test]
    fn test_allocation_by_category() {
        let holdings = vec![
            holding("A", HoldingCategory::Bond, dec!(100), dec!(250)),
            holding("B", HoldingCategory::Equity, dec!(100), dec!(500)),
            holding("C", HoldingCategory::Equity, dec!(100), dec!(250)),
        ];

        let allocation = allocation_by_category(&holdings).unwrap();

        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation[0].category, HoldingCategory::Equity);
        assert_eq!(allocation[0].value, dec!(750));
        assert_eq!(allocation[0].percent, dec!(75));
        assert_eq!(allocation[1].category, HoldingCategory::Bond);
        assert_eq!(allocation[1].percent, dec!(25));
    }

    #[test]
    fn test_allocation_with_zero_total_value() {
        let holdings = vec![holding("A", HoldingCategory::Fund, dec!(100), Decimal::ZERO)];

        let allocation = allocation_by_category(&holdings).unwrap();
        assert_eq!(allocation[0].percent, Decimal::ZERO);
    }

    #[test]
    fn test_allocation_rejects_overflowing_total() {
        let holdings = vec![
            holding("A", HoldingCategory::Equity, Decimal::ZERO, Decimal::MAX),
            holding("B", HoldingCategory::Bond, Decimal::ZERO, Decimal::MAX),
        ];

        assert!(matches!(allocation_by_category(&holdings), Err(PortfolioError::InvalidHolding(_))));
    }

    #[test]
    fn test_best_performer_ranks_extreme_ratio_first() {
        let holdings = vec![
            holding("Steady", HoldingCategory::Fund, dec!(1000), dec!(1200)),
            holding("Penny", HoldingCategory::Equity, Decimal::new(1, 28), dec!(10000000000)),
        ];

        assert_eq!(best_performer(&holdings).unwrap().name, "Penny");
    }
}
