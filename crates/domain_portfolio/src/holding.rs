//! Holding records
//!
//! A holding is the unit of a portfolio. Its gain/loss figures are derived
//! on read and never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::HoldingId;
use crate::error::PortfolioError;
use crate::percent_of;

/// Asset class of a holding
///
/// Serialized as `equity`, `fund` and `bond`; the labels `stocks`,
/// `mutual_funds` and `bonds` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingCategory {
    /// Listed shares
    #[serde(alias = "stocks")]
    Equity,
    /// Mutual funds
    #[serde(alias = "mutual_funds")]
    Fund,
    /// Bonds and other fixed income
    #[serde(alias = "bonds")]
    Bond,
}

impl HoldingCategory {
    /// All categories in declaration order
    pub const ALL: [HoldingCategory; 3] = [
        HoldingCategory::Equity,
        HoldingCategory::Fund,
        HoldingCategory::Bond,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            HoldingCategory::Equity => "Stocks",
            HoldingCategory::Fund => "Mutual Funds",
            HoldingCategory::Bond => "Bonds",
        }
    }
}

/// One recorded investment position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier, fixed at creation
    id: HoldingId,
    /// Display name
    pub name: String,
    /// Ticker or scheme code
    pub symbol: String,
    /// Asset class
    pub category: HoldingCategory,
    /// Total amount paid for the position
    pub cost_basis: Decimal,
    /// Units held
    pub units: Decimal,
    /// Price per unit at acquisition
    pub unit_price: Decimal,
    /// Acquisition date (display and ordering only)
    pub acquired_on: NaiveDate,
    /// Mark-to-market value, supplied externally
    pub current_value: Decimal,
}

impl Holding {
    /// Creates a new holding valued at its cost basis
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `symbol` - Ticker or scheme code
    /// * `category` - Asset class
    /// * `cost_basis` - Amount invested
    /// * `units` - Units purchased
    /// * `unit_price` - Price per unit at purchase
    /// * `acquired_on` - Purchase date
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        category: HoldingCategory,
        cost_basis: Decimal,
        units: Decimal,
        unit_price: Decimal,
        acquired_on: NaiveDate,
    ) -> Self {
        Self {
            id: HoldingId::new_v7(),
            name: name.into(),
            symbol: symbol.into(),
            category,
            cost_basis,
            units,
            unit_price,
            acquired_on,
            current_value: cost_basis,
        }
    }

    /// Uses a caller-supplied identifier
    pub fn with_id(mut self, id: HoldingId) -> Self {
        self.id = id;
        self
    }

    /// Sets the current market value
    pub fn with_current_value(mut self, value: Decimal) -> Self {
        self.current_value = value;
        self
    }

    /// Returns the identifier
    pub fn id(&self) -> HoldingId {
        self.id
    }

    /// Absolute gain or loss: `current_value - cost_basis`
    pub fn gain_loss(&self) -> Decimal {
        self.current_value.saturating_sub(self.cost_basis)
    }

    /// Gain or loss as a percentage of cost basis, zero when cost basis is zero
    ///
    /// Saturates at `Decimal::MAX`/`Decimal::MIN` for ratios [`Holding::validate`] rejects.
    pub fn gain_loss_percent(&self) -> Decimal {
        let gain = self.gain_loss();
        percent_of(gain, self.cost_basis).unwrap_or(
            if gain.is_sign_negative() == self.cost_basis.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            },
        )
    }

    /// Checks that every monetary and quantity field is non-negative and that
    /// the gain/loss percentage is representable
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let fields = [
            ("cost_basis", self.cost_basis),
            ("units", self.units),
            ("unit_price", self.unit_price),
            ("current_value", self.current_value),
        ];

        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(PortfolioError::InvalidHolding(format!(
                    "{} must not be negative for holding {}, got {}",
                    field, self.id, value
                )));
            }
        }

        if percent_of(self.gain_loss(), self.cost_basis).is_none() {
            return Err(PortfolioError::InvalidHolding(format!(
                "gain/loss of holding {} is too large relative to its cost basis {}",
                self.id, self.cost_basis
            )));
        }

        Ok(())
    }
}
