//! SIP planner handlers

use axum::{extract::State, http::StatusCode, Json};

use domain_planning::{project, SipParameters, SipProjection};

use crate::{AppState, error::ApiError};
use crate::dto::sip::*;
use crate::extract::{ApiJson, ApiPath};

fn project_within_limits(state: &AppState, params: &SipParameters) -> Result<SipProjection, ApiError> {
    params.validate_within(&state.config.sip_limits())?;
    Ok(project(params)?)
}

/// Projects a plan without saving it
pub async fn create_projection(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<SipParameters>,
) -> Result<Json<SipProjectionResponse>, ApiError> {
    let projection = project_within_limits(&state, &params)?;
    Ok(Json(SipProjectionResponse::from_projection(&projection, state.config.base_currency)))
}

/// Lists saved plans in save order
pub async fn list_plans(
    State(state): State<AppState>,
) -> Json<Vec<SavedPlanResponse>> {
    let plans = state.plans.read().await;
    Json(
        plans
            .list()
            .iter()
            .enumerate()
            .map(|(index, plan)| SavedPlanResponse {
                index,
                plan: SipProjectionResponse::from_projection(plan, state.config.base_currency),
            })
            .collect(),
    )
}

/// Projects a plan and saves it
pub async fn save_plan(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<SipParameters>,
) -> Result<(StatusCode, Json<SavedPlanResponse>), ApiError> {
    let projection = project_within_limits(&state, &params)?;
    let plan = SipProjectionResponse::from_projection(&projection, state.config.base_currency);

    let index = state.plans.write().await.save(projection);
    Ok((StatusCode::CREATED, Json(SavedPlanResponse { index, plan })))
}

/// Removes the plan at an index; later plans shift down
pub async fn remove_plan(
    State(state): State<AppState>,
    ApiPath(index): ApiPath<usize>,
) -> Result<StatusCode, ApiError> {
    state.plans.write().await.remove(index)?;
    Ok(StatusCode::NO_CONTENT)
}
