//! Forecast handlers

use axum::{extract::State, Json};

use core_kernel::format_amount;
use domain_planning::{forecast_series, ForecastPeriod};

use crate::{AppState, error::ApiError};
use crate::dto::forecast::*;
use crate::extract::{ApiPath, ApiQuery};

/// Table entry and projected band for a horizon
pub async fn get_forecast(
    State(state): State<AppState>,
    ApiPath(period): ApiPath<String>,
    ApiQuery(query): ApiQuery<ForecastQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let period: ForecastPeriod = period.parse()?;

    let starting_value = match query.starting_value {
        Some(value) => value,
        None => state.portfolio.read().await.snapshot().total_value,
    };

    let points = forecast_series(starting_value, period)?;

    Ok(Json(ForecastResponse {
        prediction: period.prediction(),
        months: period.months(),
        starting_value,
        display_starting_value: format_amount(starting_value, state.config.base_currency),
        points,
    }))
}
