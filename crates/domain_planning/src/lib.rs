//! Planning Domain
//!
//! This crate implements forward-looking calculations for the dashboard:
//! SIP projections, saved plans, the forecast table, and savings goals.
//!
//! # Key Concepts
//!
//! - **SIP**: A fixed monthly contribution compounding at an assumed constant annual rate
//! - **Projection**: Headline totals plus a year-by-year trajectory
//! - **Forecast**: Fixed expected-return and confidence figures per horizon
//! - **Goal**: A savings target with progress tracking
//!
//! All calculations are pure functions of their inputs. Collections
//! (`SavedPlans`, `GoalBook`) are plain single-owner values.

pub mod sip;
pub mod plans;
pub mod forecast;
pub mod goal;
pub mod error;

pub use sip::{project, SipChartSeries, SipLimits, SipParameters, SipProjection, YearlyProjection};
pub use plans::SavedPlans;
pub use forecast::{forecast_series, ForecastPeriod, ForecastPoint, Prediction, FORECAST_TABLE};
pub use goal::{Goal, GoalBook, GoalCategory};
pub use error::PlanningError;
