//! Core types and data structures for trip expense splitting

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of a trip member (an email address in practice)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wrap an identifier as-is
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an identifier from an email address, trimmed and lowercased
    pub fn from_email(email: &str) -> Self {
        Self(email.trim().to_lowercase())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Net signed position of each member in a single currency.
/// Positive means the member is owed money, negative means they owe.
pub type Balances = HashMap<MemberId, BigDecimal>;

/// Balances keyed by currency code
pub type BalancesByCurrency = HashMap<String, Balances>;

/// A shared expense paid by one member and split equally among others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense
    pub id: String,
    /// Trip the expense belongs to
    pub trip_id: String,
    /// Free-text label, display only
    pub description: String,
    /// Total cost, always positive
    pub amount: BigDecimal,
    /// Currency code; `None` means the baseline currency
    pub currency: Option<String>,
    /// Member who fronted the money
    pub paid_by: MemberId,
    /// Members sharing the cost equally
    pub split_among: Vec<MemberId>,
    /// Member who entered the expense
    pub created_by: Option<MemberId>,
    /// When the expense was created
    pub created_at: NaiveDateTime,
    /// When the expense was last updated
    pub updated_at: NaiveDateTime,
}

impl Expense {
    /// Create a new expense with a generated identifier
    pub fn new(
        trip_id: String,
        description: String,
        amount: BigDecimal,
        currency: Option<String>,
        paid_by: MemberId,
        split_among: Vec<MemberId>,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id,
            description,
            amount,
            currency,
            paid_by,
            split_among,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Each split member's share, or `None` when nobody shares the cost
    pub fn share_per_person(&self) -> Option<BigDecimal> {
        if self.split_among.is_empty() {
            return None;
        }
        Some(&self.amount / BigDecimal::from(self.split_among.len() as u64))
    }

    /// Validate the expense before it is accepted
    pub fn validate(&self) -> SplitResult<()> {
        if self.split_among.is_empty() {
            return Err(SplitError::EmptySplit);
        }

        if self.amount <= BigDecimal::from(0) {
            return Err(SplitError::InvalidAmount(format!(
                "Expense amount must be positive, got {}",
                self.amount
            )));
        }

        if self.description.trim().is_empty() {
            return Err(SplitError::Validation(
                "Expense description cannot be empty".to_string(),
            ));
        }

        if self.paid_by.as_str().trim().is_empty() {
            return Err(SplitError::Validation(
                "Please select who paid".to_string(),
            ));
        }

        Ok(())
    }
}

/// A single directed transfer that settles part of a debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Debtor making the payment
    pub from: MemberId,
    /// Creditor receiving the payment
    pub to: MemberId,
    /// Positive amount transferred
    pub amount: BigDecimal,
}

impl Settlement {
    /// Create a new settlement
    pub fn new(from: MemberId, to: MemberId, amount: BigDecimal) -> Self {
        Self { from, to, amount }
    }
}

/// Errors that can occur while recording or splitting expenses
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Please select at least one person to split with")]
    EmptySplit,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Not a member of this trip: {0}")]
    UnknownMember(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for expense operations
pub type SplitResult<T> = Result<T, SplitError>;
