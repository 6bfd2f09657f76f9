//! Storage layer
//!
//! JSON file storage with atomic writes, plus the audit log that records
//! every change made through it.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, MigratedExpense};
pub use file_io::{read_json, write_json_atomic};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Owns the expense repository and the audit logger
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    /// Load all data from disk
    ///
    /// Rows without a usable date get `today`; each backfill is audited.
    /// Returns the number of migrated rows.
    pub fn load_all(&mut self, today: NaiveDate) -> Result<usize, ExpenseError> {
        let migrated = self.expenses.load(today)?;

        if self.audit_enabled {
            let entries: Vec<_> = migrated
                .iter()
                .map(|m| AuditEntry::date_backfill(&m.expense, m.original_date.as_deref()))
                .collect();
            self.audit.log_batch(&entries)?;
        }

        Ok(migrated.len())
    }

    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::create(expense))
    }

    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::update(before, after))
    }

    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::delete(expense))
    }

    fn log(&self, entry: AuditEntry) -> Result<(), ExpenseError> {
        if self.audit_enabled {
            self.audit.log(&entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_audits_backfills() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.expenses_file(),
            r#"{"expenses": [{"id": 1, "amount": 3, "category": "Food"}]}"#,
        )
        .unwrap();

        let mut storage = Storage::new(paths).unwrap();
        assert_eq!(storage.load_all(today()).unwrap(), 1);

        let entries = storage.audit_log().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(
            entries[0].changes.as_deref(),
            Some("date: (missing) -> 2024-03-14")
        );
    }

    #[test]
    fn test_disabled_audit_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.set_audit_enabled(false);
        storage.load_all(today()).unwrap();

        let expense = storage
            .expenses
            .insert_with(|id| Expense::new(id, crate::models::Money::from_cents(100), "Food", today()))
            .unwrap();
        storage.log_create(&expense).unwrap();

        assert!(!storage.audit_log().path().exists());
    }
}
