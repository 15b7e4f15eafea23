//! Display formatting for currency amounts and percentages
//!
//! Amounts are rounded half away from zero to at most the currency's minor
//! units, trailing fractional zeros are dropped, and the integer part is
//! grouped either in thousands or, for INR, in lakhs and crores.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::money::Currency;

/// Formats an amount with the currency symbol, e.g. `₹23,23,390.76`
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount
        .round_dp_with_strategy(currency.decimal_places(), RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (digits, None),
    };

    let grouped = if currency.uses_indian_grouping() {
        group_indian(&integer)
    } else {
        group_thousands(&integer)
    };

    match fraction {
        Some(f) => format!("{}{}{}.{}", sign, currency.symbol(), grouped, f),
        None => format!("{}{}{}", sign, currency.symbol(), grouped),
    }
}

/// Formats a percentage with an explicit sign, e.g. `+8.75%`
pub fn format_percent(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded > Decimal::ZERO { "+" } else { "" };
    format!("{}{:.prec$}%", sign, rounded, prec = dp as usize)
}

fn group_thousands(integer: &str) -> String {
    let bytes = integer.as_bytes();
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

// Last three digits, then pairs: 1,23,45,678
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }
    let (head, tail) = integer.split_at(integer.len() - 3);
    let head_bytes = head.as_bytes();
    let mut out = String::with_capacity(integer.len() + integer.len() / 2);
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}
