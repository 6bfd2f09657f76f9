//! Business logic layer
//!
//! `date_range` and `aggregator` are pure functions with no I/O; `expense`
//! ties them to storage.

pub mod aggregator;
pub mod date_range;
pub mod expense;

pub use aggregator::{compute_all, compute_by_category, compute_total, CategoryTotal, ExpenseSummary};
pub use date_range::{month_containing, resolve, resolve_for_date, week_containing};
pub use expense::{
    parse_amount, parse_date, CreateExpenseInput, ExpenseService, FilteredExpenses,
    UpdateExpenseInput,
};
