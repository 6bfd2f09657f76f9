//! YAML export of one filter window

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::FilteredExpenses;

use super::json::ExpenseExport;

/// Write the export as YAML with a short comment header
pub fn export_yaml<W: Write>(filtered: &FilteredExpenses, mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_filtered(filtered);
    let to_export_error = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense export ({})", export.filter.label()).map_err(to_export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_error)?;
    writeln!(writer).map_err(to_export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}
