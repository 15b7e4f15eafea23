//! Portfolio snapshot aggregation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;
use crate::holding::Holding;
use crate::{checked_sum, percent_of};

/// Aggregate view of a portfolio at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Sum of current values
    pub total_value: Decimal,
    /// Sum of cost bases
    pub total_investment: Decimal,
    /// `total_value - total_investment`
    pub total_gain_loss: Decimal,
    /// Gain/loss as a percentage of total investment, zero when nothing is invested
    pub total_gain_loss_percent: Decimal,
    /// Number of holdings aggregated
    pub holding_count: usize,
}

impl PortfolioSnapshot {
    /// Returns true if no holdings were aggregated
    pub fn is_empty(&self) -> bool {
        self.holding_count == 0
    }
}

/// Derives the snapshot for a collection of holdings
///
/// Pure: an empty slice yields an all-zero snapshot.
///
/// # Errors
///
/// `InvalidHolding` if a total or the overall percentage does not fit in a
/// `Decimal`
pub fn recompute(holdings: &[Holding]) -> Result<PortfolioSnapshot, PortfolioError> {
    let overflow = || PortfolioError::InvalidHolding("portfolio totals exceed the representable range".to_string());

    let total_value = checked_sum(holdings.iter().map(|h| h.current_value)).ok_or_else(overflow)?;
    let total_investment = checked_sum(holdings.iter().map(|h| h.cost_basis)).ok_or_else(overflow)?;
    let total_gain_loss = total_value.checked_sub(total_investment).ok_or_else(overflow)?;
    let total_gain_loss_percent = percent_of(total_gain_loss, total_investment).ok_or_else(overflow)?;

    Ok(PortfolioSnapshot {
        total_value,
        total_investment,
        total_gain_loss,
        total_gain_loss_percent,
        holding_count: holdings.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::holding::HoldingCategory;

    fn holding(cost: Decimal, value: Decimal) -> Holding {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Holding::new("Test", "TST", HoldingCategory::Equity, cost, dec!(1), cost, date)
            .with_current_value(value)
    }

    #[test]
    fn test_empty_snapshot_is_zero() {
        let snapshot = recompute(&[]).unwrap();

        assert_eq!(snapshot, PortfolioSnapshot::default());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_two_holdings() {
        let snapshot = recompute(&[
            holding(dec!(50000), dec!(55000)),
            holding(dec!(30000), dec!(32000)),
        ])
        .unwrap();

        assert_eq!(snapshot.total_value, dec!(87000));
        assert_eq!(snapshot.total_investment, dec!(80000));
        assert_eq!(snapshot.total_gain_loss, dec!(7000));
        assert_eq!(snapshot.total_gain_loss_percent, dec!(8.75));
        assert_eq!(snapshot.holding_count, 2);
    }

    #[test]
    fn test_zero_investment_guards_percent() {
        let snapshot = recompute(&[holding(Decimal::ZERO, dec!(500))]).unwrap();

        assert_eq!(snapshot.total_gain_loss, dec!(500));
        assert_eq!(snapshot.total_gain_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let result = recompute(&[
            holding(Decimal::MAX, Decimal::MAX),
            holding(Decimal::MAX, Decimal::MAX),
        ]);

        assert!(matches!(result, Err(PortfolioError::InvalidHolding(_))));
    }
}
