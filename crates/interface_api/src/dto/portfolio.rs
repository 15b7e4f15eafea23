//! Portfolio DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_amount, format_percent, Currency, HoldingId};
use domain_portfolio::{CategoryAllocation, Holding, HoldingCategory, Portfolio, PortfolioError, PortfolioSnapshot};

/// Holding as submitted by a client
///
/// `current_value` defaults to the cost basis; `id` is assigned by the
/// server when omitted.
#[derive(Debug, Deserialize)]
pub struct HoldingRequest {
    pub id: Option<HoldingId>,
    pub name: String,
    pub symbol: String,
    pub category: HoldingCategory,
    pub cost_basis: Decimal,
    pub units: Decimal,
    pub unit_price: Decimal,
    pub acquired_on: NaiveDate,
    pub current_value: Option<Decimal>,
}

impl HoldingRequest {
    pub fn into_holding(self) -> Holding {
        let id = self.id;
        let holding = self.build();
        match id {
            Some(id) => holding.with_id(id),
            None => holding,
        }
    }

    /// Builds the holding under a path identifier, ignoring any id in the body
    pub fn into_holding_with_id(self, id: HoldingId) -> Holding {
        self.build().with_id(id)
    }

    fn build(self) -> Holding {
        let holding = Holding::new(
            self.name,
            self.symbol,
            self.category,
            self.cost_basis,
            self.units,
            self.unit_price,
            self.acquired_on,
        );
        match self.current_value {
            Some(value) => holding.with_current_value(value),
            None => holding,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceHoldingsRequest {
    pub holdings: Vec<HoldingRequest>,
}

#[derive(Debug, Deserialize)]
pub struct Valuation {
    pub id: HoldingId,
    pub current_value: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ValuationsRequest {
    pub valuations: Vec<Valuation>,
}

#[derive(Debug, Serialize)]
pub struct HoldingDisplay {
    pub cost_basis: String,
    pub current_value: String,
    pub gain_loss: String,
    pub gain_loss_percent: String,
}

#[derive(Debug, Serialize)]
pub struct HoldingResponse {
    pub id: HoldingId,
    pub name: String,
    pub symbol: String,
    pub category: HoldingCategory,
    pub category_label: &'static str,
    pub cost_basis: Decimal,
    pub units: Decimal,
    pub unit_price: Decimal,
    pub acquired_on: NaiveDate,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    pub display: HoldingDisplay,
}

impl HoldingResponse {
    pub fn from_holding(holding: &Holding, currency: Currency) -> Self {
        let gain_loss = holding.gain_loss();
        let gain_loss_percent = holding.gain_loss_percent();
        Self {
            id: holding.id(),
            name: holding.name.clone(),
            symbol: holding.symbol.clone(),
            category: holding.category,
            category_label: holding.category.label(),
            cost_basis: holding.cost_basis,
            units: holding.units,
            unit_price: holding.unit_price,
            acquired_on: holding.acquired_on,
            current_value: holding.current_value,
            gain_loss,
            gain_loss_percent,
            display: HoldingDisplay {
                cost_basis: format_amount(holding.cost_basis, currency),
                current_value: format_amount(holding.current_value, currency),
                gain_loss: format_amount(gain_loss, currency),
                gain_loss_percent: format_percent(gain_loss_percent, 2),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SnapshotDisplay {
    pub total_value: String,
    pub total_investment: String,
    pub total_gain_loss: String,
    pub total_gain_loss_percent: String,
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub snapshot: PortfolioSnapshot,
    pub display: SnapshotDisplay,
}

impl SnapshotResponse {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot, currency: Currency) -> Self {
        Self {
            snapshot: *snapshot,
            display: SnapshotDisplay {
                total_value: format_amount(snapshot.total_value, currency),
                total_investment: format_amount(snapshot.total_investment, currency),
                total_gain_loss: format_amount(snapshot.total_gain_loss, currency),
                total_gain_loss_percent: format_percent(snapshot.total_gain_loss_percent, 2),
            },
        }
    }
}

/// Holdings plus their snapshot, read under one lock
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub holdings: Vec<HoldingResponse>,
    pub snapshot: SnapshotResponse,
}

impl PortfolioResponse {
    pub fn from_portfolio(portfolio: &Portfolio, currency: Currency) -> Self {
        Self {
            holdings: portfolio
                .holdings()
                .iter()
                .map(|h| HoldingResponse::from_holding(h, currency))
                .collect(),
            snapshot: SnapshotResponse::from_snapshot(portfolio.snapshot(), currency),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub category: HoldingCategory,
    pub label: &'static str,
    pub value: Decimal,
    pub percent: Decimal,
    pub display_value: String,
}

impl AllocationResponse {
    fn from_allocation(allocation: &CategoryAllocation, currency: Currency) -> Self {
        Self {
            category: allocation.category,
            label: allocation.category.label(),
            value: allocation.value,
            percent: allocation.percent,
            display_value: format_amount(allocation.value, currency),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub best_performer: Option<HoldingResponse>,
    pub diversity: usize,
    pub allocation: Vec<AllocationResponse>,
}

impl InsightsResponse {
    pub fn from_portfolio(portfolio: &Portfolio, currency: Currency) -> Result<Self, PortfolioError> {
        Ok(Self {
            best_performer: portfolio
                .best_performer()
                .map(|h| HoldingResponse::from_holding(h, currency)),
            diversity: portfolio.diversity(),
            allocation: portfolio
                .allocation()?
                .iter()
                .map(|a| AllocationResponse::from_allocation(a, currency))
                .collect(),
        })
    }
}
