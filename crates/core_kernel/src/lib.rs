//! Core Kernel - Foundational types and utilities for the finance engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Currency and rate types
//! - Strongly-typed identifiers for holdings and goals
//! - Display formatting for currency amounts and percentages

pub mod money;
pub mod identifiers;
pub mod format;
pub mod error;

pub use money::{Currency, Rate};
pub use identifiers::{HoldingId, GoalId};
pub use format::{format_amount, format_percent};
pub use error::CoreError;
