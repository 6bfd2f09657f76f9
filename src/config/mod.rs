//! Configuration module for the expense tracker
//!
//! - Platform path resolution for config, data and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
