//! Expense book module containing expense management and the trip orchestrator

pub mod core;
pub mod expense;

pub use self::core::*;
pub use self::expense::*;
