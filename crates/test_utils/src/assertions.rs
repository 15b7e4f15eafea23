//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_planning::SipProjection;
use domain_portfolio::{recompute, Holding, PortfolioSnapshot};
use rust_decimal::Decimal;

/// Asserts that two decimals are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a snapshot equals a fresh recomputation over the holdings
pub fn assert_snapshot_consistent(snapshot: &PortfolioSnapshot, holdings: &[Holding]) {
    let expected = recompute(holdings).unwrap();
    assert_eq!(
        *snapshot, expected,
        "Snapshot is stale: got {:?}, recomputed {:?}",
        snapshot, expected
    );
}

/// Asserts the derived fields of a projection agree with each other
pub fn assert_projection_consistent(projection: &SipProjection) {
    assert_eq!(
        projection.estimated_returns,
        projection.total_value - projection.total_investment,
        "Estimated returns must equal value minus investment"
    );
    assert_eq!(
        projection.yearly.len(),
        projection.parameters.duration_years as usize,
        "Expected one yearly point per year"
    );
    if let Some(last) = projection.yearly.last() {
        assert_eq!(last.value, projection.total_value, "Last yearly value must equal the total");
        assert_eq!(last.investment, projection.total_investment, "Last yearly investment must equal the total");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{HoldingFixtures, SipFixtures};
    use domain_planning::project;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(100.001), dec!(100.002), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_assert_decimal_approx_eq_fails() {
        assert_decimal_approx_eq(dec!(100), dec!(101), dec!(0.01));
    }

    #[test]
    fn test_assert_snapshot_consistent() {
        let holdings = HoldingFixtures::mixed();
        assert_snapshot_consistent(&recompute(&holdings).unwrap(), &holdings);
    }

    #[test]
    #[should_panic(expected = "Snapshot is stale")]
    fn test_assert_snapshot_consistent_detects_stale() {
        let holdings = HoldingFixtures::mixed();
        assert_snapshot_consistent(&PortfolioSnapshot::default(), &holdings);
    }

    #[test]
    fn test_assert_projection_consistent() {
        assert_projection_consistent(&project(&SipFixtures::standard()).unwrap());
    }
}
