//! Expense repository backed by `data/expenses.json`
//!
//! The file holds the records plus the next id to hand out, so ids are never
//! reused after a delete. Loading runs the date migration: rows written before
//! expenses carried a date (or with an empty/unreadable date) are stamped with
//! the caller's "today".
//!
//! Inserts, updates and deletes are written through to disk. If the write
//! fails the in-memory change is undone, so memory never runs ahead of the file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExpenseError;
use crate::models::{AmountField, DateRange, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

const FIRST_ID: ExpenseId = ExpenseId::new(1);

fn first_id() -> ExpenseId {
    FIRST_ID
}

/// On-disk row; `date` stays raw JSON so legacy rows can be repaired
#[derive(Debug, Deserialize)]
struct StoredExpense {
    id: ExpenseId,
    #[serde(default)]
    amount: AmountField,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    date: Option<Value>,
}

impl StoredExpense {
    /// The stored date as text, for the audit trail
    fn raw_date(&self) -> Option<String> {
        match &self.date {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Returns the expense and whether its date had to be backfilled
    fn into_expense(self, today: NaiveDate) -> (Expense, bool) {
        let parsed = self
            .date
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        let expense = Expense {
            id: self.id,
            amount: self.amount,
            category: self.category,
            note: self.note,
            date: parsed.unwrap_or(today),
        };
        (expense, parsed.is_none())
    }
}

#[derive(Debug, Deserialize)]
struct ExpenseFile {
    #[serde(default = "first_id")]
    next_id: ExpenseId,
    #[serde(default)]
    expenses: Vec<StoredExpense>,
}

impl Default for ExpenseFile {
    fn default() -> Self {
        Self {
            next_id: FIRST_ID,
            expenses: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct ExpenseFileRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_id: Option<ExpenseId>,
    expenses: Vec<&'a Expense>,
}

#[derive(Debug)]
struct State {
    expenses: BTreeMap<ExpenseId, Expense>,
    /// `None` once every id up to `i64::MAX` has been handed out
    next_id: Option<ExpenseId>,
}

/// Row whose date was filled in during load
#[derive(Debug, Clone, PartialEq)]
pub struct MigratedExpense {
    /// Date text found on disk, if any
    pub original_date: Option<String>,
    pub expense: Expense,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    state: RwLock<State>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(State {
                expenses: BTreeMap::new(),
                next_id: Some(FIRST_ID),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, ExpenseError> {
        self.state
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, ExpenseError> {
        self.state
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk, backfilling missing dates with `today`
    ///
    /// Rewrites the file when anything was migrated and returns the migrated rows.
    /// A file holding the same id twice is rejected rather than silently merged.
    pub fn load(&self, today: NaiveDate) -> Result<Vec<MigratedExpense>, ExpenseError> {
        let file: ExpenseFile = read_json(&self.path)?;
        let mut expenses = BTreeMap::new();
        let mut migrated = Vec::new();

        for stored in file.expenses {
            let original_date = stored.raw_date();
            let (expense, backfilled) = stored.into_expense(today);

            if expenses.contains_key(&expense.id) {
                return Err(ExpenseError::Storage(format!(
                    "Duplicate expense id {} in {}",
                    expense.id,
                    self.path.display()
                )));
            }

            if backfilled {
                migrated.push(MigratedExpense {
                    original_date,
                    expense: expense.clone(),
                });
            }
            expenses.insert(expense.id, expense);
        }

        let after_max = match expenses.keys().next_back() {
            Some(max) => max.checked_next(),
            None => Some(FIRST_ID),
        };

        {
            let mut state = self.write()?;
            state.next_id = after_max.map(|id| id.max(file.next_id));
            state.expenses = expenses;
        }

        if !migrated.is_empty() {
            self.save()?;
        }

        Ok(migrated)
    }

    /// Save expenses to disk, oldest id first
    pub fn save(&self) -> Result<(), ExpenseError> {
        let state = self.read()?;
        self.persist(&state)
    }

    fn persist(&self, state: &State) -> Result<(), ExpenseError> {
        let file = ExpenseFileRef {
            next_id: state.next_id,
            expenses: state.expenses.values().collect(),
        };
        write_json_atomic(&self.path, &file)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        Ok(self.read()?.expenses.get(&id).cloned())
    }

    /// All expenses, newest id first
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read()?.expenses.values().rev().cloned().collect())
    }

    /// Expenses dated within `range` (inclusive), newest id first
    pub fn get_by_date_range(&self, range: &DateRange) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self
            .read()?
            .expenses
            .values()
            .rev()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect())
    }

    /// Insert and persist a new expense built from the id the store assigns
    pub fn insert_with<F>(&self, build: F) -> Result<Expense, ExpenseError>
    where
        F: FnOnce(ExpenseId) -> Expense,
    {
        let mut state = self.write()?;
        let id = state
            .next_id
            .ok_or_else(|| ExpenseError::Storage("No expense ids left to assign".into()))?;
        let mut expense = build(id);
        expense.id = id;

        state.next_id = id.checked_next();
        state.expenses.insert(id, expense.clone());

        if let Err(e) = self.persist(&state) {
            state.expenses.remove(&id);
            state.next_id = Some(id);
            return Err(e);
        }
        Ok(expense)
    }

    /// Replace and persist an existing expense, returning the previous version
    pub fn update(&self, expense: Expense) -> Result<Expense, ExpenseError> {
        let mut state = self.write()?;
        let id = expense.id;
        let previous = match state.expenses.get_mut(&id) {
            Some(slot) => std::mem::replace(slot, expense),
            None => return Err(ExpenseError::expense_not_found(id.to_string())),
        };

        if let Err(e) = self.persist(&state) {
            state.expenses.insert(id, previous);
            return Err(e);
        }
        Ok(previous)
    }

    /// Remove and persist, returning the expense if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut state = self.write()?;
        let removed = state.expenses.remove(&id);

        if let Some(expense) = &removed {
            if let Err(e) = self.persist(&state) {
                state.expenses.insert(id, expense.clone());
                return Err(e);
            }
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.expenses.len())
    }
}
