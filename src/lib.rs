//! # Tripsplit Core
//!
//! Expense splitting for shared trips: per-currency member balances and the
//! transfers that settle them.
//!
//! ## Features
//!
//! - **Balance calculation**: equal splits, payer credit, per-currency partitioning
//! - **Settlement planning**: greedy largest-first matching of creditors and debtors
//! - **Currencies**: a fixed vocabulary with display symbols; no conversion
//! - **Expense book**: validated create/update/delete over pluggable async storage
//! - **Storage abstraction**: trait-based, with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use tripsplit_core::{compute_balances, compute_settlements, Expense, MemberId};
//! use bigdecimal::BigDecimal;
//!
//! let members: Vec<MemberId> = ["a@trip.com", "b@trip.com", "c@trip.com"]
//!     .into_iter()
//!     .map(MemberId::from)
//!     .collect();
//!
//! let dinner = Expense::new(
//!     "lisbon".to_string(),
//!     "Dinner".to_string(),
//!     BigDecimal::from(90),
//!     Some("EUR".to_string()),
//!     members[0].clone(),
//!     members.clone(),
//! );
//!
//! let balances = compute_balances(&[dinner], &members);
//! let settlements = compute_settlements(&balances["EUR"]);
//! assert_eq!(settlements.len(), 2);
//! ```

pub mod balance;
pub mod book;
pub mod config;
pub mod currency;
pub mod settlement;
pub mod summary;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use balance::*;
pub use book::{ExpenseBook, ExpenseBuilder, ExpenseManager};
pub use config::*;
pub use currency::*;
pub use settlement::*;
pub use summary::*;
pub use traits::*;
pub use types::*;
