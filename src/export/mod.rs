//! Export module
//!
//! - CSV: expense rows, spreadsheet-compatible
//! - JSON: expenses plus totals for one filter window
//! - YAML: the same document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
