//! Portfolio domain errors

use thiserror::Error;

use core_kernel::HoldingId;

/// Errors that can occur in the portfolio domain
///
/// Every mutation that fails with one of these leaves the portfolio exactly
/// as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Duplicate holding identifier: {0}")]
    DuplicateIdentifier(HoldingId),

    #[error("Holding not found: {0}")]
    NotFound(HoldingId),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),
}
