//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use domain_planning::SipParameters;
use domain_portfolio::{Holding, HoldingCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::HoldingBuilder;

/// Strategy for generating holding categories
pub fn category_strategy() -> impl Strategy<Value = HoldingCategory> {
    prop_oneof![
        Just(HoldingCategory::Equity),
        Just(HoldingCategory::Fund),
        Just(HoldingCategory::Bond),
    ]
}

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for acquisition dates in 2015-2024
pub fn acquisition_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for valid holdings with fresh identifiers
pub fn holding_strategy() -> impl Strategy<Value = Holding> {
    (
        category_strategy(),
        amount_strategy(),
        amount_strategy(),
        acquisition_date_strategy(),
    )
        .prop_map(|(category, cost_basis, current_value, acquired_on)| {
            HoldingBuilder::new()
                .with_category(category)
                .with_cost_basis(cost_basis)
                .with_current_value(current_value)
                .with_acquired_on(acquired_on)
                .build()
        })
}

/// Strategy for collections of holdings with distinct identifiers
pub fn holdings_strategy(max_len: usize) -> impl Strategy<Value = Vec<Holding>> {
    prop::collection::vec(holding_strategy(), 0..=max_len)
}

/// Strategy for SIP parameters inside the default form limits
pub fn sip_parameters_strategy() -> impl Strategy<Value = SipParameters> {
    (500i64..=200_000i64, 1u32..=30u32, 1u32..=50u32).prop_map(|(contribution, rate, years)| {
        SipParameters::new(Decimal::from(contribution), Decimal::from(rate), years)
    })
}

/// Strategy for annual return rates from -50% to 30% in 0.1% steps
pub fn annual_rate_strategy() -> impl Strategy<Value = Decimal> {
    (-500i64..=300i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_planning::SipLimits;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn generated_holdings_are_valid(holding in holding_strategy()) {
            prop_assert!(holding.validate().is_ok());
        }

        #[test]
        fn generated_holdings_have_distinct_ids(holdings in holdings_strategy(20)) {
            let ids: HashSet<_> = holdings.iter().map(|h| h.id()).collect();
            prop_assert_eq!(ids.len(), holdings.len());
        }

        #[test]
        fn sip_parameters_respect_default_limits(params in sip_parameters_strategy()) {
            prop_assert!(params.validate_within(&SipLimits::default()).is_ok());
        }

        #[test]
        fn annual_rate_keeps_monthly_factor_positive(rate in annual_rate_strategy()) {
            let params = SipParameters::new(Decimal::ONE_HUNDRED, rate, 1);
            prop_assert!(params.validate().is_ok());
        }
    }
}
