//! Systematic Investment Plan projections
//!
//! Contributions are made at the start of each month, so the final value is
//! the future value of an annuity-due:
//!
//! ```text
//! FV = P * ((1 + i)^n - 1) / i * (1 + i)
//! ```
//!
//! where `P` is the monthly contribution, `i` the monthly rate and `n` the
//! number of months. A zero rate falls back to `P * n`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Rate;
use crate::error::PlanningError;

/// Months per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Inputs to a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipParameters {
    /// Amount invested at the start of every month
    pub monthly_contribution: Decimal,
    /// Expected annual return as a percentage (12 means 12%)
    pub annual_return_rate: Decimal,
    /// Investment horizon in whole years
    pub duration_years: u32,
}

impl SipParameters {
    /// Creates a new parameter set
    pub fn new(monthly_contribution: Decimal, annual_return_rate: Decimal, duration_years: u32) -> Self {
        Self {
            monthly_contribution,
            annual_return_rate,
            duration_years,
        }
    }

    /// Nominal monthly rate (annual rate / 12)
    pub fn monthly_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_return_rate).monthly()
    }

    /// Total number of monthly contributions
    pub fn total_months(&self) -> u64 {
        u64::from(self.duration_years) * u64::from(MONTHS_PER_YEAR)
    }

    /// Checks the rules every projection depends on
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the contribution is not positive, the duration
    /// is zero, or the monthly rate is -100% or lower.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.monthly_contribution <= Decimal::ZERO {
            return Err(PlanningError::invalid_parameter(format!(
                "monthly contribution must be positive, got {}",
                self.monthly_contribution
            )));
        }

        if self.duration_years == 0 {
            return Err(PlanningError::invalid_parameter("duration must be at least one year"));
        }

        if self.monthly_rate().as_decimal() <= dec!(-1) {
            return Err(PlanningError::invalid_parameter(format!(
                "annual return rate {}% makes the monthly growth factor non-positive",
                self.annual_return_rate
            )));
        }

        Ok(())
    }

    /// Checks the parameters against configured form bounds
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first bound that is violated.
    pub fn validate_within(&self, limits: &SipLimits) -> Result<(), PlanningError> {
        if self.monthly_contribution < limits.min_monthly_contribution {
            return Err(PlanningError::invalid_parameter(format!(
                "monthly contribution must be at least {}, got {}",
                limits.min_monthly_contribution, self.monthly_contribution
            )));
        }

        if self.annual_return_rate < limits.min_annual_return
            || self.annual_return_rate > limits.max_annual_return
        {
            return Err(PlanningError::invalid_parameter(format!(
                "annual return rate must be between {}% and {}%, got {}%",
                limits.min_annual_return, limits.max_annual_return, self.annual_return_rate
            )));
        }

        if self.duration_years < limits.min_duration_years
            || self.duration_years > limits.max_duration_years
        {
            return Err(PlanningError::invalid_parameter(format!(
                "duration must be between {} and {} years, got {}",
                limits.min_duration_years, limits.max_duration_years, self.duration_years
            )));
        }

        self.validate()
    }
}

/// Accepted input ranges for projections requested by end users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipLimits {
    pub min_monthly_contribution: Decimal,
    pub min_annual_return: Decimal,
    pub max_annual_return: Decimal,
    pub min_duration_years: u32,
    pub max_duration_years: u32,
}

impl Default for SipLimits {
    fn default() -> Self {
        Self {
            min_monthly_contribution: dec!(500),
            min_annual_return: dec!(1),
            max_annual_return: dec!(30),
            min_duration_years: 1,
            max_duration_years: 50,
        }
    }
}

/// Projected position at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyProjection {
    pub year: u32,
    /// Capital contributed up to this year
    pub investment: Decimal,
    /// Projected value at this year
    pub value: Decimal,
}

/// Yearly data as parallel columns for charting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipChartSeries {
    pub years: Vec<u32>,
    pub investment: Vec<Decimal>,
    pub value: Vec<Decimal>,
}

/// Result of a projection; never mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipProjection {
    pub parameters: SipParameters,
    pub total_investment: Decimal,
    pub total_value: Decimal,
    pub estimated_returns: Decimal,
    pub yearly: Vec<YearlyProjection>,
}

impl SipProjection {
    /// Splits the yearly series into parallel columns
    pub fn chart_series(&self) -> SipChartSeries {
        SipChartSeries {
            years: self.yearly.iter().map(|y| y.year).collect(),
            investment: self.yearly.iter().map(|y| y.investment).collect(),
            value: self.yearly.iter().map(|y| y.value).collect(),
        }
    }
}

/// Projects the growth of a monthly investment plan
///
/// Every yearly point is computed from the closed-form formula at that
/// horizon, so the last point equals the headline total exactly.
///
/// # Errors
///
/// `InvalidParameter` if the parameters fail [`SipParameters::validate`] or
/// any total does not fit in a `Decimal`.
///
/// # Example
///
/// ```rust
/// use domain_planning::{project, SipParameters};
/// use rust_decimal_macros::dec;
///
/// let projection = project(&SipParameters::new(dec!(10000), dec!(0), 10)).unwrap();
/// assert_eq!(projection.total_value, dec!(1200000));
/// ```
pub fn project(params: &SipParameters) -> Result<SipProjection, PlanningError> {
    params.validate()?;

    let monthly_rate = params.monthly_rate().as_decimal();
    let total_months = params.total_months();

    let total_investment = contributed(params.monthly_contribution, total_months)?;
    let total_value = future_value(params.monthly_contribution, monthly_rate, total_months)?;

    let yearly = (1..=params.duration_years)
        .map(|year| {
            let months = u64::from(year) * u64::from(MONTHS_PER_YEAR);
            Ok(YearlyProjection {
                year,
                investment: contributed(params.monthly_contribution, months)?,
                value: future_value(params.monthly_contribution, monthly_rate, months)?,
            })
        })
        .collect::<Result<Vec<_>, PlanningError>>()?;

    let estimated_returns = total_value.checked_sub(total_investment).ok_or_else(|| {
        PlanningError::invalid_parameter("estimated returns exceed the representable range")
    })?;

    debug!(
        monthly_contribution = %params.monthly_contribution,
        annual_return_rate = %params.annual_return_rate,
        duration_years = params.duration_years,
        total_value = %total_value,
        "Projected SIP"
    );

    Ok(SipProjection {
        parameters: *params,
        total_investment,
        total_value,
        estimated_returns,
        yearly,
    })
}

fn contributed(contribution: Decimal, months: u64) -> Result<Decimal, PlanningError> {
    contribution.checked_mul(Decimal::from(months)).ok_or_else(|| {
        PlanningError::invalid_parameter(format!(
            "{} months of {} exceed the representable range",
            months, contribution
        ))
    })
}

fn future_value(contribution: Decimal, monthly_rate: Decimal, months: u64) -> Result<Decimal, PlanningError> {
    if monthly_rate.is_zero() {
        return contributed(contribution, months);
    }

    let step = Decimal::ONE + monthly_rate;
    let overflow = || PlanningError::invalid_parameter(format!("growth over {} months overflows", months));

    let growth = step.checked_powu(months).ok_or_else(overflow)?;
    let annuity = (growth - Decimal::ONE)
        .checked_div(monthly_rate)
        .ok_or_else(overflow)?;

    contribution
        .checked_mul(annuity)
        .and_then(|v| v.checked_mul(step))
        .ok_or_else(overflow)
}
