//! Expense display formatting
//!
//! Register rows look like `#3      $12.50  Food • 2024-03-10`, with the note
//! on an indented line below when present.

use crate::config::settings::Settings;
use crate::models::Expense;

use super::format_date;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    let id = format!("#{}", expense.id);
    let amount = expense
        .amount_value()
        .format_with_symbol(&settings.currency_symbol);

    let mut row = format!(
        "{:<6} {:>10}  {} • {}",
        id,
        amount,
        expense.category_label(),
        format_date(expense.date, &settings.date_format)
    );

    if let Some(note) = expense.note.as_deref().filter(|n| !n.is_empty()) {
        row.push('\n');
        row.push_str(&format!("{:6}   {}", "", note));
    }

    row
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<6} {:>10}  {}\n", "ID", "Amount", "Category • Date"));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  #{}\n", expense.id));
    output.push_str(&format!(
        "Date:     {}\n",
        format_date(expense.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense
            .amount_value()
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category_label()));

    match expense.note.as_deref() {
        Some(note) if !note.is_empty() => output.push_str(&format!("Note:     {}\n", note)),
        _ => output.push_str("Note:     (none)\n"),
    }

    output
}
