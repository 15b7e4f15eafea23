//! Forecast lookup table and projected value bands
//!
//! The expected returns and confidence levels are fixed constants per
//! horizon. Nothing here is inferred from market data.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

/// Volatility used to widen the band around the expected value
pub const FORECAST_VOLATILITY: Decimal = dec!(0.15);

/// Forecast horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastPeriod {
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "2Y")]
    TwoYears,
    #[serde(rename = "5Y")]
    FiveYears,
}

/// Expected annual return and confidence per horizon, in `ForecastPeriod` order
pub const FORECAST_TABLE: [Prediction; 4] = [
    Prediction { period: ForecastPeriod::SixMonths, expected_annual_return: dec!(8.5), confidence: dec!(78) },
    Prediction { period: ForecastPeriod::OneYear, expected_annual_return: dec!(12.3), confidence: dec!(85) },
    Prediction { period: ForecastPeriod::TwoYears, expected_annual_return: dec!(15.8), confidence: dec!(72) },
    Prediction { period: ForecastPeriod::FiveYears, expected_annual_return: dec!(14.2), confidence: dec!(68) },
];

impl ForecastPeriod {
    pub const ALL: [ForecastPeriod; 4] = [
        ForecastPeriod::SixMonths,
        ForecastPeriod::OneYear,
        ForecastPeriod::TwoYears,
        ForecastPeriod::FiveYears,
    ];

    /// Horizon length in months
    pub fn months(&self) -> u32 {
        match self {
            ForecastPeriod::SixMonths => 6,
            ForecastPeriod::OneYear => 12,
            ForecastPeriod::TwoYears => 24,
            ForecastPeriod::FiveYears => 60,
        }
    }

    /// Short label, e.g. `1Y`
    pub fn label(&self) -> &'static str {
        match self {
            ForecastPeriod::SixMonths => "6M",
            ForecastPeriod::OneYear => "1Y",
            ForecastPeriod::TwoYears => "2Y",
            ForecastPeriod::FiveYears => "5Y",
        }
    }

    /// Table entry for this horizon
    pub fn prediction(&self) -> Prediction {
        FORECAST_TABLE[*self as usize]
    }
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ForecastPeriod {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastPeriod::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanningError::invalid_parameter(format!("unknown forecast period: {}", s)))
    }
}

/// Expected return and confidence for a horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub period: ForecastPeriod,
    /// Expected annual return (%)
    pub expected_annual_return: Decimal,
    /// Confidence (%)
    pub confidence: Decimal,
}

/// One month on the forecast chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: u32,
    pub label: String,
    pub expected: Decimal,
    pub upper: Decimal,
    pub lower: Decimal,
}

/// Builds the expected value and band for every month of the horizon
///
/// Month 0 is the starting value with a zero-width band. For month `i`:
///
/// ```text
/// expected = start * (1 + r / 12)^i
/// band     = expected * volatility * (1 - confidence)
/// ```
///
/// # Errors
///
/// `InvalidParameter` if the starting value is negative or too large for the
/// horizon's growth to stay representable
pub fn forecast_series(starting_value: Decimal, period: ForecastPeriod) -> Result<Vec<ForecastPoint>, PlanningError> {
    if starting_value.is_sign_negative() && !starting_value.is_zero() {
        return Err(PlanningError::invalid_parameter(format!(
            "starting value must not be negative, got {}",
            starting_value
        )));
    }

    let prediction = period.prediction();
    let step = Decimal::ONE + prediction.expected_annual_return / dec!(12) / dec!(100);
    let band_factor = FORECAST_VOLATILITY * (Decimal::ONE - prediction.confidence / dec!(100));

    let mut points = Vec::with_capacity(period.months() as usize + 1);
    points.push(ForecastPoint {
        month: 0,
        label: month_label(0),
        expected: starting_value,
        upper: starting_value,
        lower: starting_value,
    });

    for month in 1..=period.months() {
        let overflow = || {
            PlanningError::invalid_parameter(format!(
                "starting value {} grows beyond the representable range by month {}",
                starting_value, month
            ))
        };
        let expected = step
            .checked_powu(u64::from(month))
            .and_then(|growth| starting_value.checked_mul(growth))
            .ok_or_else(overflow)?;
        let band = expected.checked_mul(band_factor).ok_or_else(overflow)?;
        let upper = expected.checked_add(band).ok_or_else(overflow)?;

        points.push(ForecastPoint {
            month,
            label: month_label(month),
            expected: expected.round_dp(4),
            upper: upper.round_dp(4),
            lower: (expected - band).round_dp(4),
        });
    }

    Ok(points)
}

fn month_label(month: u32) -> String {
    match month {
        0 => "Now".to_string(),
        1..=12 => format!("{}M", month),
        _ if month % 12 == 0 => format!("{}Y", month / 12),
        _ => format!("{}Y {}M", month / 12, month % 12),
    }
}
