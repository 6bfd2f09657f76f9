//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod report;

pub use audit::handle_audit_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::handle_summary_command;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::FilterMode;

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `--filter` value, falling back to the configured default
pub fn parse_filter(filter: Option<&str>, settings: &Settings) -> ExpenseResult<FilterMode> {
    match filter {
        Some(mode) => mode.parse(),
        None => Ok(settings.default_filter),
    }
}

fn create_output_file(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_default() {
        let settings = Settings {
            default_filter: FilterMode::Week,
            ..Settings::default()
        };
        assert_eq!(parse_filter(None, &settings).unwrap(), FilterMode::Week);
        assert_eq!(parse_filter(Some("month"), &settings).unwrap(), FilterMode::Month);
    }

    #[test]
    fn test_parse_filter_rejects_unknown() {
        let err = parse_filter(Some("Week"), &Settings::default()).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidFilterMode(_)));
    }
}
