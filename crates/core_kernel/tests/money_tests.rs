//! Unit tests for the money module
//!
//! Tests cover currencies, rates, and amount display.

use core_kernel::{format_amount, format_percent, Currency, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod currencies {
    use super::*;

    #[test]
    fn test_default_currency_is_inr() {
        assert_eq!(Currency::default(), Currency::INR);
    }

    #[test]
    fn test_currency_display_is_code() {
        assert_eq!(Currency::SGD.to_string(), "SGD");
        assert_eq!(Currency::SGD.symbol(), "S$");
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" usd ".parse::<Currency>().unwrap(), Currency::USD);
        assert!("rupee".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        assert_eq!(serde_json::to_string(&Currency::EUR).unwrap(), "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, Currency::JPY);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_round_trips_percentage() {
        let rate = Rate::from_percentage(dec!(12.3));
        assert_eq!(rate.as_decimal(), dec!(0.123));
        assert_eq!(rate.as_percentage(), dec!(12.3));
    }

    #[test]
    fn test_negative_monthly_rate() {
        let rate = Rate::from_percentage(dec!(-12)).monthly();
        assert_eq!(rate.as_decimal(), dec!(-0.01));
    }

    #[test]
    fn test_zero_rate() {
        assert!(Rate::from_percentage(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percentage(dec!(8.5)).to_string(), "8.5%");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_inr_display_uses_lakh_grouping() {
        assert_eq!(format_amount(dec!(1123390.76), Currency::INR), "₹11,23,390.76");
    }

    #[test]
    fn test_usd_display_uses_thousands_grouping() {
        assert_eq!(format_amount(dec!(1123390.76), Currency::USD), "$1,123,390.76");
    }

    #[test]
    fn test_extreme_amounts_format() {
        let formatted = format_amount(Decimal::MAX, Currency::INR);
        assert!(formatted.starts_with("₹79,22,81,62"));
        assert_eq!(format_percent(Decimal::MIN, 2).chars().next(), Some('-'));
    }
}
