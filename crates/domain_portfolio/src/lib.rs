//! Portfolio Domain
//!
//! This crate implements holding records and the aggregation engine that
//! derives portfolio totals from them.
//!
//! # Key Concepts
//!
//! - **Holding**: One recorded investment position (cost, units, current value)
//! - **Snapshot**: Totals derived from the holdings, never stored independently
//! - **Portfolio**: Owns the holdings and recomputes the snapshot on every change
//!
//! # Derived Values
//!
//! Gain/loss figures are computed when read, from `current_value` and
//! `cost_basis`. A holding whose value is refreshed externally can never
//! carry a stale gain/loss.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_portfolio::{Holding, HoldingCategory, Portfolio};
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut portfolio = Portfolio::new();
//! portfolio.add(
//!     Holding::new("Nifty Index Fund", "NIFTY", HoldingCategory::Fund, dec!(50000), dec!(250), dec!(200), date)
//!         .with_current_value(dec!(55000)),
//! ).unwrap();
//!
//! assert_eq!(portfolio.snapshot().total_gain_loss, dec!(5000));
//! ```

pub mod holding;
pub mod snapshot;
pub mod portfolio;
pub mod insights;
pub mod error;

pub use holding::{Holding, HoldingCategory};
pub use snapshot::{PortfolioSnapshot, recompute};
pub use portfolio::Portfolio;
pub use insights::{CategoryAllocation, allocation_by_category, best_performer, diversity};
pub use error::PortfolioError;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Expresses `part` as a percentage of `whole`
///
/// # Arguments
///
/// * `part` - The numerator, e.g. a gain or a category value
/// * `whole` - The base amount
///
/// # Returns
///
/// `part / whole * 100`, zero when `whole` is zero, or `None` when the
/// result does not fit in a `Decimal`
///
/// # Example
///
/// ```rust
/// use domain_portfolio::percent_of;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(percent_of(dec!(7000), dec!(80000)), Some(dec!(8.75)));
/// assert_eq!(percent_of(dec!(7000), Decimal::ZERO), Some(Decimal::ZERO));
/// assert_eq!(percent_of(dec!(10000000000), Decimal::new(1, 28)), None);
/// ```
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return Some(Decimal::ZERO);
    }
    part.checked_div(whole)?.checked_mul(dec!(100))
}

/// Sums amounts, returning `None` on overflow
pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(5000), dec!(50000)), Some(dec!(10)));
        assert_eq!(percent_of(dec!(-2500), dec!(50000)), Some(dec!(-5)));
    }

    #[test]
    fn test_percent_of_zero_base() {
        assert_eq!(percent_of(dec!(100), Decimal::ZERO), Some(Decimal::ZERO));
    }

    #[test]
    fn test_percent_of_unrepresentable() {
        assert_eq!(percent_of(Decimal::MAX, dec!(0.5)), None);
        assert_eq!(percent_of(Decimal::MAX, Decimal::ONE), None);
    }
}
