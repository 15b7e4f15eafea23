//! HTTP API Layer
//!
//! This crate provides the REST API for the finance dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the portfolio, SIP planner, forecasts and goals
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects with display strings
//! - **Error Handling**: Consistent error responses
//!
//! State lives in memory. Each mutable collection sits behind its own
//! `RwLock`, so a reader never sees holdings and a snapshot from different
//! mutations.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put, delete},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_planning::{GoalBook, SavedPlans};
use domain_portfolio::Portfolio;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{forecast, goals, health, portfolio, sip};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub portfolio: Arc<RwLock<Portfolio>>,
    pub plans: Arc<RwLock<SavedPlans>>,
    pub goals: Arc<RwLock<GoalBook>>,
}

impl AppState {
    /// Creates empty state
    pub fn new(config: ApiConfig) -> Self {
        Self::with_portfolio(config, Portfolio::new())
    }

    /// Creates state seeded with an existing portfolio
    pub fn with_portfolio(config: ApiConfig, portfolio: Portfolio) -> Self {
        Self {
            config,
            portfolio: Arc::new(RwLock::new(portfolio)),
            plans: Arc::new(RwLock::new(SavedPlans::new())),
            goals: Arc::new(RwLock::new(GoalBook::new())),
        }
    }
}

/// Creates the main API router with empty state
pub fn create_router(config: ApiConfig) -> Router {
    router(AppState::new(config))
}

/// Builds the router around existing state
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let portfolio_routes = Router::new()
        .route("/", get(portfolio::get_portfolio))
        .route("/holdings", put(portfolio::replace_holdings))
        .route("/holdings", post(portfolio::add_holding))
        .route("/holdings/:id", put(portfolio::update_holding))
        .route("/holdings/:id", delete(portfolio::remove_holding))
        .route("/valuations", post(portfolio::apply_valuations))
        .route("/insights", get(portfolio::get_insights));

    let sip_routes = Router::new()
        .route("/projections", post(sip::create_projection))
        .route("/plans", get(sip::list_plans))
        .route("/plans", post(sip::save_plan))
        .route("/plans/:index", delete(sip::remove_plan));

    let forecast_routes = Router::new()
        .route("/:period", get(forecast::get_forecast));

    let goal_routes = Router::new()
        .route("/", get(goals::list_goals))
        .route("/", post(goals::create_goal))
        .route("/:id", put(goals::update_goal))
        .route("/:id", delete(goals::remove_goal));

    let api_routes = Router::new()
        .nest("/portfolio", portfolio_routes)
        .nest("/sip", sip_routes)
        .nest("/forecasts", forecast_routes)
        .nest("/goals", goal_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
