//! Category breakdown report
//!
//! Totals for one filter window with each category's share of the total and
//! the slice data a pie chart needs.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, FilterMode, Money};
use crate::services::FilteredExpenses;

/// Slice colors, assigned in category order and reused cyclically
pub const CHART_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// One category row of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub sum: Money,
    /// Share of the window total, 0-100
    pub percentage: f64,
    /// Chart color for this category
    pub color: &'static str,
}

/// Input for a pie chart slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub amount: f64,
    pub color: &'static str,
}

/// Category Breakdown Report
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    pub mode: FilterMode,
    pub range: Option<DateRange>,
    pub total: Money,
    pub expense_count: usize,
    pub categories: Vec<CategoryShare>,
}

impl CategoryBreakdownReport {
    /// Build the report from an already fetched and aggregated window
    pub fn from_filtered(filtered: &FilteredExpenses) -> Self {
        let total = filtered.summary.total;

        let categories = filtered
            .summary
            .by_category
            .iter()
            .enumerate()
            .map(|(index, entry)| CategoryShare {
                category: entry.category.clone(),
                sum: entry.sum,
                percentage: percentage_of(entry.sum, total),
                color: CHART_PALETTE[index % CHART_PALETTE.len()],
            })
            .collect();

        Self {
            mode: filtered.mode,
            range: filtered.range,
            total,
            expense_count: filtered.expenses.len(),
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Pie chart input, one slice per category in report order
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        self.categories
            .iter()
            .map(|c| ChartSlice {
                name: c.category.clone(),
                amount: c.sum.as_decimal(),
                color: c.color,
            })
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense By Category\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Total ({}): {}\n",
            self.mode.label(),
            self.total.format_with_symbol(currency_symbol)
        ));
        if let Some(range) = &self.range {
            output.push_str(&format!("Period: {} to {}\n", range.start(), range.end()));
        }
        output.push_str(&format!("Expenses: {}\n\n", self.expense_count));

        if self.is_empty() {
            output.push_str("No category data available\n");
            return output;
        }

        output.push_str(&format!("{:<28} {:>12} {:>7}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for share in &self.categories {
            output.push_str(&format!(
                "{:<28} {:>12} {:>6.1}%\n",
                truncate(&share.category, 28),
                share.sum.format_with_symbol(currency_symbol),
                share.percentage
            ));
        }

        output
    }

    /// Export the report rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let (start, end) = match &self.range {
            Some(range) => (range.start().to_string(), range.end().to_string()),
            None => (String::new(), String::new()),
        };

        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Filter", "Start Date", "End Date", "Category", "Amount", "Percentage", "Color"])?;

        let mode = self.mode.as_str();
        for share in &self.categories {
            let amount = format!("{:.2}", share.sum.as_decimal());
            let percentage = format!("{:.2}", share.percentage);
            csv.write_record([
                mode,
                start.as_str(),
                end.as_str(),
                share.category.as_str(),
                amount.as_str(),
                percentage.as_str(),
                share.color,
            ])?;
        }

        let total = format!("{:.2}", self.total.as_decimal());
        let total_share = if self.total.is_zero() { "0.00" } else { "100.00" };
        csv.write_record([mode, start.as_str(), end.as_str(), "TOTAL", total.as_str(), total_share, ""])?;

        csv.flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))
    }
}

fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
