//! Expense tracker - student expense tracking from the terminal
//!
//! This library provides the core of the `expenses` application: resolving
//! "this week" and "this month" into calendar ranges, and reducing expense
//! records into a grand total plus per-category sums.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, filter modes)
//! - `storage`: JSON file storage layer
//! - `services`: Date range resolution, aggregation and expense management
//! - `audit`: Audit logging system
//! - `reports`: Category breakdown report
//! - `export`: CSV, JSON and YAML export
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{compute_all, resolve};
//!
//! let range = resolve("week", &chrono::Local::now())?;
//! let summary = compute_all(&expenses);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
