//! Expense recording and management

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Expense manager for validated create/update/delete operations
pub struct ExpenseManager<S: ExpenseStorage> {
    storage: S,
    validator: Box<dyn ExpenseValidator>,
}

impl<S: ExpenseStorage> ExpenseManager<S> {
    /// Create a new expense manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new expense manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn ExpenseValidator>) -> Self {
        Self { storage, validator }
    }

    fn check(&self, expense: &Expense, members: &[MemberId]) -> SplitResult<()> {
        let result = self
            .validator
            .validate_expense(expense)
            .and_then(|_| self.validator.validate_members(expense, members));

        if let Err(ref err) = result {
            tracing::warn!(expense_id = %expense.id, error = %err, "Rejected expense");
        }
        result
    }

    /// Record a new expense after validating it against the trip roster
    pub async fn record_expense(
        &mut self,
        expense: Expense,
        members: &[MemberId],
    ) -> SplitResult<Expense> {
        self.check(&expense, members)?;

        self.storage.save_expense(&expense).await?;
        tracing::debug!(
            expense_id = %expense.id,
            trip_id = %expense.trip_id,
            amount = %expense.amount,
            "Recorded expense"
        );

        Ok(expense)
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> SplitResult<Option<Expense>> {
        self.storage.get_expense(expense_id).await
    }

    /// Get an expense by ID, returning an error if not found
    pub async fn get_expense_required(&self, expense_id: &str) -> SplitResult<Expense> {
        self.storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| SplitError::ExpenseNotFound(expense_id.to_string()))
    }

    /// List all expenses of a trip
    pub async fn list_expenses(&self, trip_id: &str) -> SplitResult<Vec<Expense>> {
        self.storage.list_expenses(trip_id).await
    }

    /// Replace an existing expense, keeping its creation metadata
    pub async fn update_expense(
        &mut self,
        mut expense: Expense,
        members: &[MemberId],
    ) -> SplitResult<Expense> {
        let existing = self.get_expense_required(&expense.id).await?;
        self.check(&expense, members)?;

        expense.trip_id = existing.trip_id;
        expense.created_at = existing.created_at;
        expense.created_by = existing.created_by;
        expense.updated_at = chrono::Utc::now().naive_utc();

        self.storage.update_expense(&expense).await?;
        tracing::debug!(expense_id = %expense.id, "Updated expense");

        Ok(expense)
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> SplitResult<()> {
        self.get_expense_required(expense_id).await?;
        self.storage.delete_expense(expense_id).await?;
        tracing::debug!(expense_id, "Deleted expense");
        Ok(())
    }
}

/// Builder for entering an expense field by field
#[derive(Debug)]
pub struct ExpenseBuilder {
    expense: Expense,
}

impl ExpenseBuilder {
    /// Start an expense for a trip, paid by `paid_by`
    pub fn new(trip_id: String, description: String, paid_by: MemberId) -> Self {
        Self {
            expense: Expense::new(
                trip_id,
                description,
                BigDecimal::from(0),
                None,
                paid_by,
                Vec::new(),
            ),
        }
    }

    /// Set the total amount
    pub fn amount(mut self, amount: BigDecimal) -> Self {
        self.expense.amount = amount;
        self
    }

    /// Set the currency code
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.expense.currency = Some(code.into());
        self
    }

    /// Add a member to the split; adding the same member twice has no effect
    pub fn split_with(mut self, member: MemberId) -> Self {
        if !self.expense.split_among.contains(&member) {
            self.expense.split_among.push(member);
        }
        self
    }

    /// Split among all given members
    pub fn split_among<I>(self, members: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        members.into_iter().fold(self, Self::split_with)
    }

    /// Record who entered the expense
    pub fn created_by(mut self, member: MemberId) -> Self {
        self.expense.created_by = Some(member);
        self
    }

    /// Build the expense
    pub fn build(self) -> SplitResult<Expense> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}
