//! Trip expense book that ties storage, validation and settlement together

use bigdecimal::BigDecimal;

use crate::book::{ExpenseBuilder, ExpenseManager};
use crate::config::SettlementConfig;
use crate::summary::TripSummary;
use crate::traits::*;
use crate::types::*;

/// Expense book for a single trip
pub struct ExpenseBook<S: ExpenseStorage> {
    trip_id: String,
    members: Vec<MemberId>,
    config: SettlementConfig,
    expense_manager: ExpenseManager<S>,
}

impl<S: ExpenseStorage> ExpenseBook<S> {
    /// Create a new book for a trip and its members
    pub fn new(trip_id: String, members: Vec<MemberId>, storage: S) -> Self {
        Self {
            trip_id,
            members,
            config: SettlementConfig::default(),
            expense_manager: ExpenseManager::new(storage),
        }
    }

    /// Create a new book with a custom validator
    pub fn with_validator(
        trip_id: String,
        members: Vec<MemberId>,
        storage: S,
        validator: Box<dyn ExpenseValidator>,
    ) -> Self {
        Self {
            trip_id,
            members,
            config: SettlementConfig::default(),
            expense_manager: ExpenseManager::with_validator(storage, validator),
        }
    }

    /// Replace the settlement configuration
    pub fn with_config(mut self, config: SettlementConfig) -> Self {
        self.config = config;
        self
    }

    /// Trip this book belongs to
    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    /// Members sharing the trip's expenses
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Replace the member roster, e.g. after someone joins or leaves
    pub fn set_members(&mut self, members: Vec<MemberId>) {
        self.members = members;
    }

    /// Start building an expense for this trip
    pub fn expense(&self, description: &str, paid_by: MemberId) -> ExpenseBuilder {
        ExpenseBuilder::new(self.trip_id.clone(), description.to_string(), paid_by)
    }

    /// Record a new expense
    pub async fn record_expense(&mut self, mut expense: Expense) -> SplitResult<Expense> {
        expense.trip_id = self.trip_id.clone();
        self.expense_manager
            .record_expense(expense, &self.members)
            .await
    }

    /// Record an expense split equally among every trip member
    pub async fn record_shared_expense(
        &mut self,
        description: &str,
        amount: BigDecimal,
        currency: Option<&str>,
        paid_by: MemberId,
    ) -> SplitResult<Expense> {
        let mut builder = self
            .expense(description, paid_by)
            .amount(amount)
            .split_among(self.members.iter().cloned());
        if let Some(code) = currency {
            builder = builder.currency(code);
        }
        let expense = builder.build()?;
        self.record_expense(expense).await
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> SplitResult<Option<Expense>> {
        self.expense_manager.get_expense(expense_id).await
    }

    /// List the trip's expenses
    pub async fn list_expenses(&self) -> SplitResult<Vec<Expense>> {
        self.expense_manager.list_expenses(&self.trip_id).await
    }

    /// Update an existing expense
    pub async fn update_expense(&mut self, expense: Expense) -> SplitResult<Expense> {
        self.expense_manager
            .update_expense(expense, &self.members)
            .await
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> SplitResult<()> {
        self.expense_manager.delete_expense(expense_id).await
    }

    /// Recompute totals, balances and settlements from the stored expenses
    pub async fn summary(&self) -> SplitResult<TripSummary> {
        let expenses = self.list_expenses().await?;
        Ok(TripSummary::with_config(
            &expenses,
            &self.members,
            &self.config,
        ))
    }
}
