//! Expense record model
//!
//! Amounts are stored leniently: rows written by older builds or edited by
//! hand may carry a string, `null` or no amount at all. Reading never fails on
//! such rows; they simply contribute nothing to totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Label used for records without a category
pub const OTHER_CATEGORY: &str = "Other";

/// Raw amount as found in storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl AmountField {
    /// Coerce to money; anything that isn't a finite number counts as zero
    pub fn to_money(&self) -> Money {
        match self {
            Self::Number(value) => Money::from_decimal(*value),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Money::zero();
                }
                text.parse::<f64>()
                    .map(Money::from_decimal)
                    .unwrap_or_default()
            }
            Self::Missing | Self::Other(_) => Money::zero(),
        }
    }
}

impl From<Money> for AmountField {
    fn from(money: Money) -> Self {
        Self::Number(money.as_decimal())
    }
}

/// A single expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    #[serde(default)]
    pub amount: AmountField,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount: amount.into(),
            category: Some(category.into()),
            note: None,
            date,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Amount after lenient coercion
    pub fn amount_value(&self) -> Money {
        self.amount.to_money()
    }

    /// Category used for grouping: the stored label, or "Other" when it is
    /// empty or absent. Labels are otherwise taken verbatim.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => OTHER_CATEGORY,
        }
    }

    /// Validate the fields a user can enter
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount_value().is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount_value()));
        }

        match self.category.as_deref() {
            Some(label) if !label.trim().is_empty() => Ok(()),
            _ => Err(ExpenseValidationError::MissingCategory),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category_label(),
            self.amount_value()
        )
    }
}

/// Reasons an expense is rejected on entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
