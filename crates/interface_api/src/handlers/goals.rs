//! Goal handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use core_kernel::GoalId;

use crate::{AppState, error::ApiError};
use crate::dto::goal::*;
use crate::extract::{ApiJson, ApiPath};

/// Lists goals in creation order
pub async fn list_goals(
    State(state): State<AppState>,
) -> Json<Vec<GoalResponse>> {
    let today = Utc::now().date_naive();
    let goals = state.goals.read().await;
    Json(
        goals
            .list()
            .iter()
            .map(|g| GoalResponse::from_goal(g, today, state.config.base_currency))
            .collect(),
    )
}

/// Creates a goal
pub async fn create_goal(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GoalRequest>,
) -> Result<(StatusCode, Json<GoalResponse>), ApiError> {
    let goal = request.into_goal(None)?;
    let response = GoalResponse::from_goal(&goal, Utc::now().date_naive(), state.config.base_currency);

    state.goals.write().await.add(goal)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Replaces a goal
pub async fn update_goal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GoalId>,
    ApiJson(request): ApiJson<GoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = request.into_goal(Some(id))?;
    let response = GoalResponse::from_goal(&goal, Utc::now().date_naive(), state.config.base_currency);

    state.goals.write().await.update(goal)?;
    Ok(Json(response))
}

/// Removes a goal
pub async fn remove_goal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GoalId>,
) -> Result<StatusCode, ApiError> {
    state.goals.write().await.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
