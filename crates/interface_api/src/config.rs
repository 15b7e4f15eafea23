//! API configuration

use core_kernel::{CoreError, Currency};
use domain_planning::SipLimits;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Currency used for display strings
    pub base_currency: Currency,
    /// Smallest accepted monthly SIP contribution
    pub sip_min_monthly_contribution: Decimal,
    /// Lowest accepted annual return (%)
    pub sip_min_annual_return: Decimal,
    /// Highest accepted annual return (%)
    pub sip_max_annual_return: Decimal,
    pub sip_min_duration_years: u32,
    pub sip_max_duration_years: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let limits = SipLimits::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            base_currency: Currency::INR,
            sip_min_monthly_contribution: limits.min_monthly_contribution,
            sip_min_annual_return: limits.min_annual_return,
            sip_max_annual_return: limits.max_annual_return,
            sip_min_duration_years: limits.min_duration_years,
            sip_max_duration_years: limits.max_duration_years,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Input bounds applied to SIP requests
    pub fn sip_limits(&self) -> SipLimits {
        SipLimits {
            min_monthly_contribution: self.sip_min_monthly_contribution,
            min_annual_return: self.sip_min_annual_return,
            max_annual_return: self.sip_max_annual_return,
            min_duration_years: self.sip_min_duration_years,
            max_duration_years: self.sip_max_duration_years,
        }
    }

    /// Rejects settings that would make every SIP request fail
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.sip_min_monthly_contribution <= Decimal::ZERO {
            return Err(CoreError::configuration(format!(
                "sip_min_monthly_contribution must be positive, got {}",
                self.sip_min_monthly_contribution
            )));
        }
        if self.sip_min_annual_return > self.sip_max_annual_return {
            return Err(CoreError::configuration(format!(
                "sip_min_annual_return {} exceeds sip_max_annual_return {}",
                self.sip_min_annual_return, self.sip_max_annual_return
            )));
        }
        if self.sip_min_annual_return <= dec!(-1200) {
            return Err(CoreError::configuration(
                "sip_min_annual_return must be above -1200",
            ));
        }
        if self.sip_min_duration_years == 0 || self.sip_min_duration_years > self.sip_max_duration_years {
            return Err(CoreError::configuration(format!(
                "SIP duration range {}..={} is empty or starts at zero",
                self.sip_min_duration_years, self.sip_max_duration_years
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_limits() {
        let config = ApiConfig::default();

        assert_eq!(config.sip_limits(), SipLimits::default());
        assert_eq!(config.base_currency, Currency::INR);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let config = ApiConfig {
            sip_min_annual_return: dec!(40),
            ..ApiConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));

        let config = ApiConfig {
            sip_min_duration_years: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
