//! CLI command for the category summary

use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::reports::CategoryBreakdownReport;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{create_output_file, parse_filter, today};

/// Print the category breakdown, or write it to a CSV file
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    filter: Option<String>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let mode = parse_filter(filter.as_deref(), settings)?;
    let filtered = ExpenseService::new(storage).summarize(mode, today())?;
    let report = CategoryBreakdownReport::from_filtered(&filtered);

    if let Some(path) = output {
        let mut writer = create_output_file(&path)?;
        report.export_csv(&mut writer)?;
        println!("Summary exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
