//! Expense service
//!
//! Validates user input before it reaches the store, keeps the audit log in
//! step with every change, and pairs filtered queries with their totals.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, Expense, ExpenseId, FilterMode, Money};
use crate::storage::Storage;

use super::aggregator::{self, ExpenseSummary};
use super::date_range;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: String,
    pub note: Option<String>,
    pub date: NaiveDate,
}

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub amount: Option<Money>,
    pub category: Option<String>,
    /// An empty note clears it
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateExpenseInput {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.note.is_none() && self.date.is_none()
    }
}

/// Rows for one filter together with their totals
#[derive(Debug, Clone)]
pub struct FilteredExpenses {
    pub mode: FilterMode,
    /// `None` when the mode is `all`
    pub range: Option<DateRange>,
    /// Newest id first
    pub expenses: Vec<Expense>,
    pub summary: ExpenseSummary,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, store and audit a new expense
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let amount = require_positive(input.amount)?;
        let category = normalize_category(&input.category)?;
        let note = input.note.as_deref().and_then(normalize_note);

        let expense = self.storage.expenses.insert_with(|id| Expense {
            id,
            amount: amount.into(),
            category: Some(category),
            note,
            date: input.date,
        })?;

        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Get an expense or fail with `NotFound`
    pub fn require(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Apply the supplied fields to an existing expense
    pub fn update(&self, id: ExpenseId, input: UpdateExpenseInput) -> ExpenseResult<Expense> {
        let mut expense = self.require(id)?;

        if let Some(amount) = input.amount {
            expense.amount = require_positive(amount)?.into();
        }
        if let Some(category) = input.category {
            expense.category = Some(normalize_category(&category)?);
        }
        if let Some(note) = input.note {
            expense.note = normalize_note(&note);
        }
        if let Some(date) = input.date {
            expense.date = date;
        }

        let before = self.storage.expenses.update(expense.clone())?;

        if before != expense {
            self.storage.log_update(&before, &expense)?;
        }

        Ok(expense)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        self.storage.log_delete(&removed)?;

        Ok(removed)
    }

    /// Expenses in the window selected by `mode` around `today`, newest first
    pub fn list(&self, mode: FilterMode, today: NaiveDate) -> ExpenseResult<Vec<Expense>> {
        match date_range::resolve_for_date(mode, today) {
            Some(range) => self.storage.expenses.get_by_date_range(&range),
            None => self.storage.expenses.get_all(),
        }
    }

    /// Fetch the window selected by `mode` and aggregate it
    pub fn summarize(&self, mode: FilterMode, today: NaiveDate) -> ExpenseResult<FilteredExpenses> {
        let range = date_range::resolve_for_date(mode, today);
        let expenses = match &range {
            Some(range) => self.storage.expenses.get_by_date_range(range)?,
            None => self.storage.expenses.get_all()?,
        };
        let summary = aggregator::compute_all(&expenses);

        Ok(FilteredExpenses {
            mode,
            range,
            expenses,
            summary,
        })
    }
}

/// Parse a user-typed amount, which must be a positive number
pub fn parse_amount(text: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(text).map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid amount '{}': please enter a positive number",
            text.trim()
        ))
    })?;
    require_positive(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", text.trim()))
    })
}

fn require_positive(amount: Money) -> ExpenseResult<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(ExpenseError::Validation(format!(
            "Amount must be a positive number, got {}",
            amount
        )))
    }
}

fn normalize_category(category: &str) -> ExpenseResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::Validation("Category is required".into()));
    }
    Ok(trimmed.to_string())
}

fn normalize_note(note: &str) -> Option<String> {
    let trimmed = note.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
