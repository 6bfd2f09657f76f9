//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub expense_id: ExpenseId,

    /// Expense before the operation (updates and deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// Expense after the operation (creates and updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    /// Field-level summary such as `amount: $5.00 -> $7.50`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id,
            before: None,
            after: Some(expense.clone()),
            changes: None,
        }
    }

    pub fn update(before: &Expense, after: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            expense_id: after.id,
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes: describe_changes(before, after),
        }
    }

    /// Date filled in while loading a row that had none
    pub fn date_backfill(expense: &Expense, original_date: Option<&str>) -> Self {
        let original = match original_date {
            Some(text) if !text.is_empty() => format!("{:?}", text),
            _ => "(missing)".to_string(),
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            expense_id: expense.id,
            before: None,
            after: Some(expense.clone()),
            changes: Some(format!("date: {} -> {}", original, expense.date)),
        }
    }

    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: expense.id,
            before: Some(expense.clone()),
            after: None,
            changes: None,
        }
    }

    /// Format the entry for `expenses audit`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(subject) = self.after.as_ref().or(self.before.as_ref()) {
            output.push_str(&format!(
                " ({} {})",
                subject.category_label(),
                subject.amount_value()
            ));
        }

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}

/// Describe which user-visible fields differ, or `None` if nothing changed
pub fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    fn note(expense: &Expense) -> &str {
        expense.note.as_deref().unwrap_or("(none)")
    }

    let mut changes = Vec::new();

    if before.amount_value() != after.amount_value() {
        changes.push(format!(
            "amount: {} -> {}",
            before.amount_value(),
            after.amount_value()
        ));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: {} -> {}",
            before.category_label(),
            after.category_label()
        ));
    }
    if before.note != after.note {
        changes.push(format!("note: {} -> {}", note(before), note(after)));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
