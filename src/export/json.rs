//! JSON export of one filter window

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, Expense, FilterMode};
use crate::services::{ExpenseSummary, FilteredExpenses};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Expenses and totals for a filter window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of the tool that wrote the export
    pub app_version: String,

    pub filter: FilterMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,

    pub expenses: Vec<Expense>,

    pub summary: ExpenseSummary,
}

impl ExpenseExport {
    pub fn from_filtered(filtered: &FilteredExpenses) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filtered.mode,
            range: filtered.range,
            expenses: filtered.expenses.clone(),
            summary: filtered.summary.clone(),
        }
    }
}

/// Write the export as JSON
pub fn export_json<W: Write>(filtered: &FilteredExpenses, writer: W, pretty: bool) -> ExpenseResult<()> {
    let export = ExpenseExport::from_filtered(filtered);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| ExpenseError::Export(e.to_string()))
}
