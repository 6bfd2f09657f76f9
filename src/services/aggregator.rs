//! Expense aggregation
//!
//! Reduces an already-filtered slice of expenses into a grand total and
//! per-category sums. Category order is the order in which each category is
//! first seen, so list and chart rendering stay deterministic.
//!
//! These functions never fail: malformed amounts count as zero and records
//! without a category are grouped under "Other".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, Money};

/// Sum of one category within a batch of expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub sum: Money,
}

/// Grand total plus per-category breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: Money,
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Look up the sum for a category label
    pub fn category_sum(&self, category: &str) -> Option<Money> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.sum)
    }
}

/// Sum of all amounts; zero for an empty slice
///
/// Always equal to the total reported by [`compute_all`].
pub fn compute_total(records: &[Expense]) -> Money {
    compute_all(records).total
}

/// Per-category sums in first-seen order
pub fn compute_by_category(records: &[Expense]) -> Vec<CategoryTotal> {
    compute_all(records).by_category
}

/// Total and per-category sums in a single pass
///
/// Category sums accumulate in `i128` and are clamped to the `Money` range
/// once at the end. `total` is the sum of the `by_category` sums, so the two
/// always agree.
pub fn compute_all(records: &[Expense]) -> ExpenseSummary {
    let mut sums: Vec<(&str, i128)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let cents = i128::from(record.amount_value().cents());
        let label = record.category_label();

        match index.get(label) {
            Some(&slot) => sums[slot].1 += cents,
            None => {
                index.insert(label, sums.len());
                sums.push((label, cents));
            }
        }
    }

    let by_category: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(label, cents)| CategoryTotal {
            category: label.to_string(),
            sum: Money::from_cents_saturating(cents),
        })
        .collect();
    let total = by_category.iter().map(|c| c.sum).sum();

    ExpenseSummary { total, by_category }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountField, ExpenseId, OTHER_CATEGORY};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: i64, cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            Money::from_cents(cents),
            category,
            date(2024, 3, 1),
        )
    }

    fn total_of(by_category: &[CategoryTotal]) -> Money {
        by_category.iter().map(|c| c.sum).sum()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_total(&[]), Money::zero());
        assert!(compute_by_category(&[]).is_empty());

        let summary = compute_all(&[]);
        assert_eq!(summary, ExpenseSummary::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_end_to_end_example() {
        let records = vec![
            Expense::new(ExpenseId::new(1), Money::from_cents(1250), "Food", date(2024, 3, 10)),
            Expense::new(ExpenseId::new(2), Money::from_cents(4000), "Rent", date(2024, 3, 1)),
            Expense::new(ExpenseId::new(3), Money::from_cents(750), "Food", date(2024, 3, 15)),
        ];

        let summary = compute_all(&records);

        assert_eq!(summary.total.as_decimal(), 60.0);
        assert_eq!(
            summary.by_category,
            vec![
                CategoryTotal { category: "Food".into(), sum: Money::from_cents(2000) },
                CategoryTotal { category: "Rent".into(), sum: Money::from_cents(4000) },
            ]
        );
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            expense(1, 100, "Books"),
            expense(2, 100, "Food"),
            expense(3, 100, "Books"),
            expense(4, 100, "Rent"),
            expense(5, 100, "Food"),
        ];

        let labels: Vec<_> = compute_by_category(&records)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(labels, vec!["Books", "Food", "Rent"]);

        let reversed: Vec<_> = records.iter().rev().cloned().collect();
        let labels: Vec<_> = compute_by_category(&reversed)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(labels, vec!["Food", "Rent", "Books"]);
    }

    #[test]
    fn test_empty_category_merges_with_other() {
        let mut missing = expense(3, 250, "");
        missing.category = None;

        let records = vec![expense(1, 1000, ""), expense(2, 500, OTHER_CATEGORY), missing];
        let by_category = compute_by_category(&records);

        assert_eq!(
            by_category,
            vec![CategoryTotal { category: "Other".into(), sum: Money::from_cents(1750) }]
        );
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let records = vec![expense(1, 100, "food"), expense(2, 200, "Food")];
        let summary = compute_all(&records);

        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.category_sum("food"), Some(Money::from_cents(100)));
        assert_eq!(summary.category_sum("Food"), Some(Money::from_cents(200)));
        assert_eq!(summary.category_sum("FOOD"), None);
    }

    #[test]
    fn test_malformed_amount_contributes_zero() {
        let mut bad = expense(1, 0, "Food");
        bad.amount = AmountField::Text("abc".into());

        let summary = compute_all(&[bad]);
        assert_eq!(summary.total, Money::zero());
        assert_eq!(
            summary.by_category,
            vec![CategoryTotal { category: "Food".into(), sum: Money::zero() }]
        );
    }

    #[test]
    fn test_mixed_amount_shapes() {
        let mut text = expense(2, 0, "Food");
        text.amount = AmountField::Text("2.75".into());
        let mut missing = expense(3, 0, "Rent");
        missing.amount = AmountField::Missing;

        let records = vec![expense(1, 1000, "Food"), text, missing];
        let summary = compute_all(&records);

        assert_eq!(summary.total.cents(), 1275);
        assert_eq!(summary.category_sum("Food"), Some(Money::from_cents(1275)));
        assert_eq!(summary.category_sum("Rent"), Some(Money::zero()));
    }

    #[test]
    fn test_total_matches_category_sums() {
        // Decimal amounts that do not add up exactly in binary floating point
        let amounts = [0.1, 0.2, 0.3, 19.99, 5.01, 1e-3, 1234.56, 0.07];
        let categories = ["Food", "", "Books", "Food", "Rent", "Other", "Books", "Fun"];

        let records: Vec<Expense> = amounts
            .iter()
            .zip(categories.iter())
            .enumerate()
            .map(|(i, (amount, category))| {
                let mut e = expense(i as i64 + 1, 0, category);
                e.amount = AmountField::Number(*amount);
                e
            })
            .collect();

        for len in 0..=records.len() {
            let slice = &records[..len];
            let summary = compute_all(slice);
            assert_eq!(summary.total, compute_total(slice));
            assert_eq!(summary.total, total_of(&summary.by_category));
            assert_eq!(summary.by_category, compute_by_category(slice));
        }
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let mut number = expense(1, 0, "Food");
        number.amount = AmountField::Number(1e300);
        let mut text = expense(2, 0, "Food");
        text.amount = AmountField::Text("1e300".into());
        let records = vec![number, text, expense(3, 1250, "Rent")];

        let summary = compute_all(&records);

        assert_eq!(summary.category_sum("Food"), Some(Money::MAX));
        assert_eq!(summary.category_sum("Rent"), Some(Money::from_cents(1250)));
        assert_eq!(summary.total, Money::MAX);
        assert_eq!(summary.total, total_of(&summary.by_category));
        assert_eq!(compute_total(&records), summary.total);
    }

    #[test]
    fn test_overflow_within_a_category_cancels_out() {
        let mut up = expense(1, 0, "Food");
        up.amount = AmountField::Number(9e16);
        let mut down = expense(2, 0, "Food");
        down.amount = AmountField::Number(-9e16);

        let records = vec![up.clone(), up, down.clone(), down, expense(3, 500, "Bus")];
        let summary = compute_all(&records);

        assert_eq!(summary.category_sum("Food"), Some(Money::zero()));
        assert_eq!(summary.total, Money::from_cents(500));
        assert_eq!(summary.total, total_of(&summary.by_category));
    }
}
