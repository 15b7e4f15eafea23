//! Request and response bodies

pub mod portfolio;
pub mod sip;
pub mod forecast;
pub mod goal;
