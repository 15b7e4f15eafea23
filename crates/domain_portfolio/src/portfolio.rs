//! Portfolio aggregate
//!
//! `Portfolio` owns the holding collection together with its snapshot. Every
//! mutation validates its input, builds the candidate collection and its
//! snapshot, and only then replaces both, so the pair can never be observed
//! out of step.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::HoldingId;
use crate::error::PortfolioError;
use crate::holding::Holding;
use crate::insights::{self, CategoryAllocation};
use crate::snapshot::{recompute, PortfolioSnapshot};

/// A mutable collection of holdings with an always-current snapshot
#[derive(Debug, Clone, Default, Serialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    snapshot: PortfolioSnapshot,
}

impl Portfolio {
    /// Creates an empty portfolio
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio from an initial collection
    pub fn from_holdings(holdings: Vec<Holding>) -> Result<Self, PortfolioError> {
        let mut portfolio = Self::new();
        portfolio.set_all(holdings)?;
        Ok(portfolio)
    }

    /// Holdings in insertion order
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// The snapshot for the current holdings
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    /// Looks up a holding by identifier
    pub fn get(&self, id: HoldingId) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id() == id)
    }

    /// Number of holdings
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio holds nothing
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Replaces the entire collection
    ///
    /// # Errors
    ///
    /// * `InvalidHolding` if any holding is invalid or the totals overflow
    /// * `DuplicateIdentifier` if two holdings share an identifier
    pub fn set_all(&mut self, holdings: Vec<Holding>) -> Result<PortfolioSnapshot, PortfolioError> {
        let mut seen = HashSet::with_capacity(holdings.len());
        for holding in &holdings {
            holding.validate()?;
            if !seen.insert(holding.id()) {
                return Err(PortfolioError::DuplicateIdentifier(holding.id()));
            }
        }

        let snapshot = self.commit(holdings)?;
        debug!(holdings = self.holdings.len(), "Replaced portfolio holdings");
        Ok(snapshot)
    }

    /// Appends a holding
    ///
    /// # Errors
    ///
    /// * `InvalidHolding` if the holding is invalid or the totals overflow
    /// * `DuplicateIdentifier` if the identifier is already present
    pub fn add(&mut self, holding: Holding) -> Result<PortfolioSnapshot, PortfolioError> {
        holding.validate()?;
        if self.position(holding.id()).is_some() {
            return Err(PortfolioError::DuplicateIdentifier(holding.id()));
        }

        let (id, symbol) = (holding.id(), holding.symbol.clone());
        let mut candidate = self.holdings.clone();
        candidate.push(holding);
        let snapshot = self.commit(candidate)?;
        debug!(holding_id = %id, symbol = %symbol, "Added holding");
        Ok(snapshot)
    }

    /// Removes the holding with the given identifier and returns it
    ///
    /// # Errors
    ///
    /// * `NotFound` if no holding has that identifier
    /// * `InvalidHolding` if the remaining gain/loss percentage overflows
    pub fn remove(&mut self, id: HoldingId) -> Result<Holding, PortfolioError> {
        let index = self.position(id).ok_or(PortfolioError::NotFound(id))?;

        let mut candidate = self.holdings.clone();
        let removed = candidate.remove(index);
        self.commit(candidate)?;
        debug!(holding_id = %id, "Removed holding");
        Ok(removed)
    }

    /// Replaces the holding with the same identifier and returns the previous record
    ///
    /// # Errors
    ///
    /// * `InvalidHolding` if the replacement is invalid or the totals overflow
    /// * `NotFound` if no holding has that identifier
    pub fn update(&mut self, holding: Holding) -> Result<Holding, PortfolioError> {
        holding.validate()?;
        let index = self
            .position(holding.id())
            .ok_or(PortfolioError::NotFound(holding.id()))?;

        let id = holding.id();
        let mut candidate = self.holdings.clone();
        let previous = std::mem::replace(&mut candidate[index], holding);
        self.commit(candidate)?;
        debug!(holding_id = %id, "Updated holding");
        Ok(previous)
    }

    /// Sets the current value of several holdings in one step
    ///
    /// The whole batch is checked before any value changes.
    ///
    /// # Errors
    ///
    /// * `NotFound` if any identifier is absent
    /// * `InvalidHolding` if any revalued holding is invalid or the totals overflow
    pub fn apply_valuations(
        &mut self,
        valuations: &[(HoldingId, Decimal)],
    ) -> Result<PortfolioSnapshot, PortfolioError> {
        let mut candidate = self.holdings.clone();
        for (id, value) in valuations {
            let index = self.position(*id).ok_or(PortfolioError::NotFound(*id))?;
            candidate[index].current_value = *value;
            candidate[index].validate()?;
        }

        let snapshot = self.commit(candidate)?;
        debug!(updated = valuations.len(), total_value = %snapshot.total_value, "Applied valuations");
        Ok(snapshot)
    }

    /// Holding with the highest gain/loss percentage
    pub fn best_performer(&self) -> Option<&Holding> {
        insights::best_performer(&self.holdings)
    }

    /// Number of distinct categories held
    pub fn diversity(&self) -> usize {
        insights::diversity(&self.holdings)
    }

    /// Current value split by category
    pub fn allocation(&self) -> Result<Vec<CategoryAllocation>, PortfolioError> {
        insights::allocation_by_category(&self.holdings)
    }

    fn position(&self, id: HoldingId) -> Option<usize> {
        self.holdings.iter().position(|h| h.id() == id)
    }

    // Leaves `self` untouched when the snapshot cannot be computed
    fn commit(&mut self, holdings: Vec<Holding>) -> Result<PortfolioSnapshot, PortfolioError> {
        let snapshot = recompute(&holdings)?;
        self.holdings = holdings;
        self.snapshot = snapshot;
        Ok(snapshot)
    }
}
