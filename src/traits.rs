//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for expense records
///
/// The splitting core never talks to a database itself; any backend (a hosted
/// document store, SQLite, in-memory, etc.) can supply expenses by
/// implementing these methods.
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Save a new expense
    async fn save_expense(&mut self, expense: &Expense) -> SplitResult<()>;

    /// Get an expense by ID
    async fn get_expense(&self, expense_id: &str) -> SplitResult<Option<Expense>>;

    /// List all expenses recorded for a trip
    async fn list_expenses(&self, trip_id: &str) -> SplitResult<Vec<Expense>>;

    /// Replace an existing expense
    async fn update_expense(&mut self, expense: &Expense) -> SplitResult<()>;

    /// Delete an expense
    async fn delete_expense(&mut self, expense_id: &str) -> SplitResult<()>;
}

/// Trait for implementing custom expense validation rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate an expense before saving
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()>;

    /// Validate that the payer and split members belong to the trip
    fn validate_members(&self, expense: &Expense, members: &[MemberId]) -> SplitResult<()>;
}

/// Default validator: rejects empty splits and non-positive amounts
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
        expense.validate()
    }

    fn validate_members(&self, _expense: &Expense, _members: &[MemberId]) -> SplitResult<()> {
        Ok(())
    }
}
