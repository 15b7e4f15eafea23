//! Forecast DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_planning::{ForecastPoint, Prediction};

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Defaults to the current portfolio value
    pub starting_value: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    #[serde(flatten)]
    pub prediction: Prediction,
    pub months: u32,
    pub starting_value: Decimal,
    pub display_starting_value: String,
    pub points: Vec<ForecastPoint>,
}
