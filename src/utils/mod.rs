//! Storage and validation helpers for expense books

pub mod memory_storage;
pub mod validation;

pub use memory_storage::*;
pub use validation::*;
