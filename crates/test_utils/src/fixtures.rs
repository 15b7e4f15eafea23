//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for holdings, SIP plans and goals.
//! The figures mirror the sample data shown on the dashboard so scenarios
//! read the same in every test suite.

use chrono::NaiveDate;
use core_kernel::{GoalId, HoldingId};
use domain_planning::{Goal, GoalCategory, SipParameters};
use domain_portfolio::{Holding, HoldingCategory};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn acquired() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    pub fn goal_deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// Fixture for deterministic identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn reliance() -> HoldingId {
        "HLD-550e8400-e29b-41d4-a716-446655440001".parse().unwrap()
    }

    pub fn index_fund() -> HoldingId {
        "HLD-550e8400-e29b-41d4-a716-446655440002".parse().unwrap()
    }

    pub fn government_bond() -> HoldingId {
        "HLD-550e8400-e29b-41d4-a716-446655440003".parse().unwrap()
    }

    /// Never used by any fixture
    pub fn unknown_holding() -> HoldingId {
        "HLD-550e8400-e29b-41d4-a716-4466554400ff".parse().unwrap()
    }

    pub fn emergency_fund() -> GoalId {
        "GOAL-550e8400-e29b-41d4-a716-446655440010".parse().unwrap()
    }
}

/// Fixture for holdings
///
/// Identifiers come from `IdFixtures`, so each call returns equal holdings.
pub struct HoldingFixtures;

impl HoldingFixtures {
    /// Equity position bought for 50000, now worth 55000 (+10%)
    pub fn reliance() -> Holding {
        Holding::new(
            "Reliance Industries",
            "RELIANCE",
            HoldingCategory::Equity,
            dec!(50000),
            dec!(20),
            dec!(2500),
            DateFixtures::acquired(),
        )
        .with_id(IdFixtures::reliance())
        .with_current_value(dec!(55000))
    }

    /// Fund position bought for 30000, now worth 32000
    pub fn index_fund() -> Holding {
        Holding::new(
            "Nifty 50 Index Fund",
            "NIFTY50",
            HoldingCategory::Fund,
            dec!(30000),
            dec!(150),
            dec!(200),
            DateFixtures::acquired(),
        )
        .with_id(IdFixtures::index_fund())
        .with_current_value(dec!(32000))
    }

    /// Bond position bought for 20000, now worth 19000
    pub fn government_bond() -> Holding {
        Holding::new(
            "Government Bond 2030",
            "GSEC2030",
            HoldingCategory::Bond,
            dec!(20000),
            dec!(20),
            dec!(1000),
            DateFixtures::acquired(),
        )
        .with_id(IdFixtures::government_bond())
        .with_current_value(dec!(19000))
    }

    /// The two-holding scenario: totals 87000 / 80000 / 7000 / 8.75%
    pub fn two_holdings() -> Vec<Holding> {
        vec![Self::reliance(), Self::index_fund()]
    }

    /// One holding per category
    pub fn mixed() -> Vec<Holding> {
        vec![Self::reliance(), Self::index_fund(), Self::government_bond()]
    }
}

/// Fixture for SIP parameters
pub struct SipFixtures;

impl SipFixtures {
    /// 10000 a month at 12% for 10 years
    pub fn standard() -> SipParameters {
        SipParameters::new(dec!(10000), dec!(12), 10)
    }

    /// Zero return, so value equals investment
    pub fn zero_rate() -> SipParameters {
        SipParameters::new(dec!(10000), Decimal::ZERO, 10)
    }

    /// Smallest plan the default limits accept
    pub fn minimum() -> SipParameters {
        SipParameters::new(dec!(500), dec!(1), 1)
    }
}

/// Fixture for goals
pub struct GoalFixtures;

impl GoalFixtures {
    /// 25% funded emergency fund
    pub fn emergency_fund() -> Goal {
        Goal::new(
            "Emergency Fund",
            dec!(500000),
            dec!(125000),
            DateFixtures::goal_deadline(),
            GoalCategory::Emergency,
        )
        .unwrap()
        .with_id(IdFixtures::emergency_fund())
        .with_description("Six months of expenses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_portfolio::recompute;

    #[test]
    fn test_two_holdings_scenario_totals() {
        let snapshot = recompute(&HoldingFixtures::two_holdings()).unwrap();

        assert_eq!(snapshot.total_value, dec!(87000));
        assert_eq!(snapshot.total_gain_loss_percent, dec!(8.75));
    }

    #[test]
    fn test_fixture_ids_are_stable() {
        assert_eq!(HoldingFixtures::reliance(), HoldingFixtures::reliance());
        assert_eq!(IdFixtures::reliance().to_string(), "HLD-550e8400-e29b-41d4-a716-446655440001");
        assert_ne!(IdFixtures::reliance(), IdFixtures::unknown_holding());
    }

    #[test]
    fn test_fixtures_are_valid() {
        for holding in HoldingFixtures::mixed() {
            assert!(holding.validate().is_ok());
        }
        assert!(SipFixtures::standard().validate().is_ok());
        assert!(GoalFixtures::emergency_fund().validate().is_ok());
    }
}
