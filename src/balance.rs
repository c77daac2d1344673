//! Per-currency balance derivation from shared expenses

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::config::SettlementConfig;
use crate::types::*;

/// Derives every member's net signed balance per currency.
///
/// Balances are recomputed from the full expense list on every call; nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct BalanceCalculator {
    config: SettlementConfig,
}

impl BalanceCalculator {
    /// Create a calculator with the given configuration
    pub fn new(config: SettlementConfig) -> Self {
        Self { config }
    }

    /// Compute balances for each currency that appears in `expenses`.
    ///
    /// Every member in `members` starts at zero in each of those currencies, so
    /// inactive members are still listed. The payer is credited with the full
    /// amount and each split member is debited an equal share.
    pub fn compute_balances(
        &self,
        expenses: &[Expense],
        members: &[MemberId],
    ) -> BalancesByCurrency {
        let mut by_currency = BalancesByCurrency::new();

        for expense in expenses {
            let currency = self.config.resolve_currency(expense.currency.as_deref());

            let balances = by_currency.entry(currency).or_insert_with(|| {
                members
                    .iter()
                    .map(|member| (member.clone(), BigDecimal::from(0)))
                    .collect()
            });

            let Some(share) = expense.share_per_person() else {
                tracing::warn!(
                    expense_id = %expense.id,
                    "Skipping expense with nobody to split with"
                );
                continue;
            };

            *balances
                .entry(expense.paid_by.clone())
                .or_insert_with(|| BigDecimal::from(0)) += &expense.amount;

            for member in &expense.split_among {
                *balances
                    .entry(member.clone())
                    .or_insert_with(|| BigDecimal::from(0)) -= &share;
            }
        }

        tracing::trace!(
            expenses = expenses.len(),
            currencies = by_currency.len(),
            "Computed balances"
        );

        by_currency
    }

    /// Total spent per currency
    pub fn totals_by_currency(&self, expenses: &[Expense]) -> HashMap<String, BigDecimal> {
        let mut totals: HashMap<String, BigDecimal> = HashMap::new();
        for expense in expenses {
            let currency = self.config.resolve_currency(expense.currency.as_deref());
            *totals.entry(currency).or_insert_with(|| BigDecimal::from(0)) += &expense.amount;
        }
        totals
    }
}

/// Compute per-currency balances with the default configuration
pub fn compute_balances(expenses: &[Expense], members: &[MemberId]) -> BalancesByCurrency {
    BalanceCalculator::default().compute_balances(expenses, members)
}

/// Sum of all balances in one currency; zero up to rounding for derived balances
pub fn balance_total(balances: &Balances) -> BigDecimal {
    balances.values().sum()
}
