//! Core data models
//!
//! Expense records, money, and the filter/range types used to pick a
//! reporting window.

pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;

pub use expense::{AmountField, Expense, ExpenseValidationError, OTHER_CATEGORY};
pub use filter::{DateRange, FilterMode};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
