//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory expense storage for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> SplitResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> SplitResult<RwLockReadGuard<'_, HashMap<String, Expense>>> {
        self.expenses
            .read()
            .map_err(|e| SplitError::Storage(e.to_string()))
    }

    fn write(&self) -> SplitResult<RwLockWriteGuard<'_, HashMap<String, Expense>>> {
        self.expenses
            .write()
            .map_err(|e| SplitError::Storage(e.to_string()))
    }
}

#[async_trait]
impl ExpenseStorage for MemoryStorage {
    async fn save_expense(&mut self, expense: &Expense) -> SplitResult<()> {
        let mut expenses = self.write()?;
        if expenses.contains_key(&expense.id) {
            return Err(SplitError::Storage(format!(
                "Expense '{}' already exists",
                expense.id
            )));
        }
        expenses.insert(expense.id.clone(), expense.clone());
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> SplitResult<Option<Expense>> {
        Ok(self.read()?.get(expense_id).cloned())
    }

    async fn list_expenses(&self, trip_id: &str) -> SplitResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .read()?
            .values()
            .filter(|expense| expense.trip_id == trip_id)
            .cloned()
            .collect();
        // Stable order for callers that display the list
        expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(expenses)
    }

    async fn update_expense(&mut self, expense: &Expense) -> SplitResult<()> {
        let mut expenses = self.write()?;
        match expenses.get_mut(&expense.id) {
            Some(existing) => {
                *existing = expense.clone();
                Ok(())
            }
            None => Err(SplitError::ExpenseNotFound(expense.id.clone())),
        }
    }

    async fn delete_expense(&mut self, expense_id: &str) -> SplitResult<()> {
        if self.write()?.remove(expense_id).is_some() {
            Ok(())
        } else {
            Err(SplitError::ExpenseNotFound(expense_id.to_string()))
        }
    }
}
