//! Per-trip snapshot of totals, balances and settlements

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::balance::BalanceCalculator;
use crate::config::SettlementConfig;
use crate::settlement::SettlementPlanner;
use crate::types::*;

/// Everything the expense view shows, recomputed from scratch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Total spent per currency
    pub totals: HashMap<String, BigDecimal>,
    /// Net balance of each member per currency
    pub balances: BalancesByCurrency,
    /// Transfers that settle each currency
    pub settlements: HashMap<String, Vec<Settlement>>,
}

impl TripSummary {
    /// Build a summary with the default configuration
    pub fn from_expenses(expenses: &[Expense], members: &[MemberId]) -> Self {
        Self::with_config(expenses, members, &SettlementConfig::default())
    }

    /// Build a summary with an explicit configuration
    pub fn with_config(
        expenses: &[Expense],
        members: &[MemberId],
        config: &SettlementConfig,
    ) -> Self {
        let calculator = BalanceCalculator::new(config.clone());
        let planner = SettlementPlanner::new(config.clone());

        let totals = calculator.totals_by_currency(expenses);
        let balances = calculator.compute_balances(expenses, members);
        let settlements = planner.plan_all(&balances);

        Self {
            totals,
            balances,
            settlements,
        }
    }

    /// Currencies that still have transfers to make, sorted by code
    pub fn outstanding(&self) -> Vec<(&str, &[Settlement])> {
        let mut outstanding: Vec<(&str, &[Settlement])> = self
            .settlements
            .iter()
            .filter(|(_, settlements)| !settlements.is_empty())
            .map(|(currency, settlements)| (currency.as_str(), settlements.as_slice()))
            .collect();
        outstanding.sort_by_key(|(currency, _)| *currency);
        outstanding
    }

    /// Whether every currency is already settled
    pub fn is_settled(&self) -> bool {
        self.settlements.values().all(Vec::is_empty)
    }
}
