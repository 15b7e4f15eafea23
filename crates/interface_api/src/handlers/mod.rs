//! Route handlers

pub mod health;
pub mod portfolio;
pub mod sip;
pub mod forecast;
pub mod goals;
