//! Greedy debt settlement between creditors and debtors

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::config::SettlementConfig;
use crate::types::*;

/// Plans the transfers that bring every balance in a currency back to zero.
///
/// Creditors are drained largest first against the most indebted members. The
/// result has at most `creditors + debtors - 1` transfers, which is not always
/// the global minimum.
#[derive(Debug, Clone, Default)]
pub struct SettlementPlanner {
    config: SettlementConfig,
}

impl SettlementPlanner {
    /// Create a planner with the given configuration
    pub fn new(config: SettlementConfig) -> Self {
        Self { config }
    }

    /// Compute the ordered list of transfers for one currency
    pub fn compute_settlements(&self, balances: &Balances) -> Vec<Settlement> {
        let epsilon = &self.config.epsilon;
        let zero = BigDecimal::from(0);

        let (mut creditors, mut debtors): (Vec<_>, Vec<_>) = balances
            .iter()
            .filter(|(_, balance)| !self.config.is_settled(balance))
            .map(|(member, balance)| (member.clone(), balance.clone()))
            .partition(|(_, balance)| *balance > zero);
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debtors.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut settlements = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < creditors.len() && j < debtors.len() {
            let (creditor, credit) = &mut creditors[i];
            let (debtor, debt) = &mut debtors[j];

            let amount = credit.clone().min(debt.abs());
            settlements.push(Settlement::new(
                debtor.clone(),
                creditor.clone(),
                amount.clone(),
            ));

            *credit -= &amount;
            *debt += &amount;

            if *credit < *epsilon {
                i += 1;
            }
            if debt.abs() < *epsilon {
                j += 1;
            }
        }

        tracing::debug!(
            creditors = creditors.len(),
            debtors = debtors.len(),
            settlements = settlements.len(),
            "Planned settlements"
        );

        settlements
    }

    /// Plan every currency independently
    pub fn plan_all(&self, balances: &BalancesByCurrency) -> HashMap<String, Vec<Settlement>> {
        balances
            .iter()
            .map(|(currency, balances)| (currency.clone(), self.compute_settlements(balances)))
            .collect()
    }
}

/// Compute settlements for one currency with the default configuration
pub fn compute_settlements(balances: &Balances) -> Vec<Settlement> {
    SettlementPlanner::default().compute_settlements(balances)
}

/// Apply transfers to a balance map and return what is left.
///
/// Paying raises the debtor's balance and receiving lowers the creditor's, so
/// a complete plan leaves every member at (approximately) zero.
pub fn apply_settlements(balances: &Balances, settlements: &[Settlement]) -> Balances {
    let mut remaining = balances.clone();
    for settlement in settlements {
        *remaining
            .entry(settlement.from.clone())
            .or_insert_with(|| BigDecimal::from(0)) += &settlement.amount;
        *remaining
            .entry(settlement.to.clone())
            .or_insert_with(|| BigDecimal::from(0)) -= &settlement.amount;
    }
    remaining
}
