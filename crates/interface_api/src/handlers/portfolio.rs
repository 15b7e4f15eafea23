//! Portfolio handlers
//!
//! Every mutation returns the full portfolio as it stands after the change.

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::HoldingId;

use crate::{AppState, error::ApiError};
use crate::dto::portfolio::*;
use crate::extract::{ApiJson, ApiPath};

/// Returns holdings with derived fields and the snapshot
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Json<PortfolioResponse> {
    let portfolio = state.portfolio.read().await;
    Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency))
}

/// Replaces the whole collection
pub async fn replace_holdings(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ReplaceHoldingsRequest>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let holdings = request.holdings.into_iter().map(HoldingRequest::into_holding).collect();

    let mut portfolio = state.portfolio.write().await;
    portfolio.set_all(holdings)?;
    Ok(Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency)))
}

/// Adds a holding
pub async fn add_holding(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<HoldingRequest>,
) -> Result<(StatusCode, Json<PortfolioResponse>), ApiError> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.add(request.into_holding())?;
    Ok((
        StatusCode::CREATED,
        Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency)),
    ))
}

/// Replaces the holding with the path identifier
pub async fn update_holding(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<HoldingId>,
    ApiJson(request): ApiJson<HoldingRequest>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.update(request.into_holding_with_id(id))?;
    Ok(Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency)))
}

/// Removes a holding
pub async fn remove_holding(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<HoldingId>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.remove(id)?;
    Ok(Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency)))
}

/// Applies a batch of current values; all or nothing
pub async fn apply_valuations(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ValuationsRequest>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let valuations: Vec<_> = request
        .valuations
        .into_iter()
        .map(|v| (v.id, v.current_value))
        .collect();

    let mut portfolio = state.portfolio.write().await;
    portfolio.apply_valuations(&valuations)?;
    Ok(Json(PortfolioResponse::from_portfolio(&portfolio, state.config.base_currency)))
}

/// Best performer, diversity and allocation
pub async fn get_insights(
    State(state): State<AppState>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let portfolio = state.portfolio.read().await;
    Ok(Json(InsightsResponse::from_portfolio(&portfolio, state.config.base_currency)?))
}
