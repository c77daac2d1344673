//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;
use std::collections::HashSet;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> SplitResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(SplitError::InvalidAmount(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an expense description is valid
pub fn validate_description(description: &str) -> SplitResult<()> {
    if description.trim().is_empty() {
        return Err(SplitError::Validation(
            "Expense description cannot be empty".to_string(),
        ));
    }

    if description.len() > 200 {
        return Err(SplitError::Validation(
            "Expense description cannot exceed 200 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a member belongs to the trip
pub fn validate_member(member: &MemberId, members: &[MemberId]) -> SplitResult<()> {
    if members.contains(member) {
        Ok(())
    } else {
        Err(SplitError::UnknownMember(member.to_string()))
    }
}

/// Validate the split set: non-empty, no member listed twice
pub fn validate_split_among(split_among: &[MemberId]) -> SplitResult<()> {
    if split_among.is_empty() {
        return Err(SplitError::EmptySplit);
    }

    let mut seen = HashSet::new();
    for member in split_among {
        if !seen.insert(member) {
            return Err(SplitError::Validation(format!(
                "'{}' appears more than once in the split",
                member
            )));
        }
    }

    Ok(())
}

/// Enhanced expense validator that also checks the trip roster
pub struct EnhancedExpenseValidator;

impl ExpenseValidator for EnhancedExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
        validate_split_among(&expense.split_among)?;
        validate_positive_amount(&expense.amount)?;
        validate_description(&expense.description)?;
        expense.validate()
    }

    fn validate_members(&self, expense: &Expense, members: &[MemberId]) -> SplitResult<()> {
        validate_member(&expense.paid_by, members)?;
        for member in &expense.split_among {
            validate_member(member, members)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<MemberId> {
        vec![MemberId::from("a@x.com"), MemberId::from("b@x.com")]
    }

    fn expense(paid_by: &str, split: &[&str]) -> Expense {
        Expense::new(
            "trip".to_string(),
            "Taxi".to_string(),
            BigDecimal::from(12),
            None,
            MemberId::from(paid_by),
            split.iter().map(|m| MemberId::from(*m)).collect(),
        )
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(&BigDecimal::from(1)).is_ok());
        assert!(validate_positive_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_positive_amount(&BigDecimal::from(-5)).is_err());
    }

    #[test]
    fn test_duplicate_split_member_rejected() {
        let result = EnhancedExpenseValidator
            .validate_expense(&expense("a@x.com", &["a@x.com", "a@x.com"]));
        assert!(matches!(result, Err(SplitError::Validation(_))));
    }

    #[test]
    fn test_empty_split_rejected_first() {
        let result = EnhancedExpenseValidator.validate_expense(&expense("a@x.com", &[]));
        assert!(matches!(result, Err(SplitError::EmptySplit)));
    }

    #[test]
    fn test_members_must_be_on_roster() {
        let validator = EnhancedExpenseValidator;
        assert!(validator
            .validate_members(&expense("a@x.com", &["a@x.com", "b@x.com"]), &roster())
            .is_ok());

        let stranger_paid = validator.validate_members(&expense("z@x.com", &["a@x.com"]), &roster());
        assert!(matches!(stranger_paid, Err(SplitError::UnknownMember(m)) if m == "z@x.com"));

        let stranger_split = validator.validate_members(&expense("a@x.com", &["z@x.com"]), &roster());
        assert!(matches!(stranger_split, Err(SplitError::UnknownMember(_))));
    }

    #[test]
    fn test_long_description_rejected() {
        assert!(validate_description(&"x".repeat(201)).is_err());
        assert!(validate_description("Museum tickets").is_ok());
    }
}
