//! CLI command for data export

use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{create_output_file, parse_filter, today};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense rows only)
    Csv,
    /// JSON format (rows plus totals)
    Json,
    /// YAML format (rows plus totals, human-readable)
    Yaml,
}

/// Export the expenses selected by `filter`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    output: PathBuf,
    format: ExportFormat,
    filter: Option<String>,
    pretty: bool,
) -> ExpenseResult<()> {
    let mode = parse_filter(filter.as_deref(), settings)?;
    let filtered = ExpenseService::new(storage).summarize(mode, today())?;

    let mut writer = create_output_file(&output)?;
    match format {
        ExportFormat::Csv => export_expenses_csv(&filtered.expenses, &mut writer)?,
        ExportFormat::Json => export_json(&filtered, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(&filtered, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expense(s) ({}) to: {}",
        filtered.expenses.len(),
        mode.label(),
        output.display()
    );

    Ok(())
}
