//! Currency vocabulary and display formatting

use bigdecimal::{BigDecimal, RoundingMode};
use serde::Serialize;

use crate::types::MemberId;

/// A supported currency and how it is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// ISO 4217 code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
}

/// Currencies an expense can be entered in
pub const CURRENCIES: [CurrencyInfo; 8] = [
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    CurrencyInfo {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
    },
    CurrencyInfo {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    CurrencyInfo {
        code: "JPY",
        symbol: "¥",
        name: "Japanese Yen",
    },
    CurrencyInfo {
        code: "CHF",
        symbol: "Fr",
        name: "Swiss Franc",
    },
    CurrencyInfo {
        code: "CNY",
        symbol: "¥",
        name: "Chinese Yuan",
    },
    CurrencyInfo {
        code: "AED",
        symbol: "د.إ",
        name: "UAE Dirham",
    },
];

/// Look up a supported currency by its code
pub fn find_currency(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Display symbol for a code; unknown codes are shown as-is
pub fn currency_symbol(code: &str) -> &str {
    find_currency(code).map_or(code, |c| c.symbol)
}

/// Round an amount to two decimal places, half away from zero
pub fn round_to_cents(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Format an amount for display, e.g. `€ 33.33`
pub fn format_amount(amount: &BigDecimal, code: &str) -> String {
    format!("{} {}", currency_symbol(code), round_to_cents(amount))
}

/// Short name for a member: the local part of an email address
pub fn display_name(member: &MemberId) -> &str {
    let id = member.as_str();
    id.split('@').next().unwrap_or(id)
}
