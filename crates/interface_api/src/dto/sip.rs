//! SIP DTOs
//!
//! Requests deserialize straight into `SipParameters`.

use serde::Serialize;

use core_kernel::{format_amount, Currency};
use domain_planning::{SipChartSeries, SipProjection};

#[derive(Debug, Serialize)]
pub struct SipDisplay {
    pub monthly_contribution: String,
    pub total_investment: String,
    pub total_value: String,
    pub estimated_returns: String,
}

#[derive(Debug, Serialize)]
pub struct SipProjectionResponse {
    #[serde(flatten)]
    pub projection: SipProjection,
    pub chart: SipChartSeries,
    pub display: SipDisplay,
}

impl SipProjectionResponse {
    pub fn from_projection(projection: &SipProjection, currency: Currency) -> Self {
        Self {
            chart: projection.chart_series(),
            display: SipDisplay {
                monthly_contribution: format_amount(projection.parameters.monthly_contribution, currency),
                total_investment: format_amount(projection.total_investment, currency),
                total_value: format_amount(projection.total_value, currency),
                estimated_returns: format_amount(projection.estimated_returns, currency),
            },
            projection: projection.clone(),
        }
    }
}

/// A saved projection and its current position in the list
#[derive(Debug, Serialize)]
pub struct SavedPlanResponse {
    pub index: usize,
    #[serde(flatten)]
    pub plan: SipProjectionResponse,
}
