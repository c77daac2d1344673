//! Tunable parameters shared by the balance and settlement stages

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Currency code applied to expenses that do not carry one
pub const BASELINE_CURRENCY: &str = "EUR";

/// Default settlement tolerance: one hundredth of a currency unit
pub fn default_epsilon() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// Configuration for balance calculation and settlement planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Balances whose magnitude is at or below this value count as settled
    pub epsilon: BigDecimal,
    /// Currency used for expenses with a missing or blank currency code
    pub baseline_currency: String,
}

impl SettlementConfig {
    /// Create a configuration with explicit values
    pub fn new(epsilon: BigDecimal, baseline_currency: String) -> Self {
        Self {
            epsilon,
            baseline_currency,
        }
    }

    /// Override the settlement tolerance
    pub fn with_epsilon(mut self, epsilon: BigDecimal) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Override the baseline currency
    pub fn with_baseline_currency(mut self, code: impl Into<String>) -> Self {
        self.baseline_currency = code.into();
        self
    }

    /// Resolve the currency bucket for an expense's (possibly missing) code
    pub fn resolve_currency(&self, code: Option<&str>) -> String {
        match code {
            Some(code) if !code.trim().is_empty() => code.to_string(),
            _ => self.baseline_currency.clone(),
        }
    }

    /// Whether a signed amount is close enough to zero to be ignored
    pub fn is_settled(&self, amount: &BigDecimal) -> bool {
        amount.abs() <= self.epsilon
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self::new(default_epsilon(), BASELINE_CURRENCY.to_string())
    }
}
