//! CSV export of expense rows

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Write `ID,Date,Category,Note,Amount` rows in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Category", "Note", "Amount"])?;

    for expense in expenses {
        let id = expense.id.to_string();
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = format!("{:.2}", expense.amount_value().as_decimal());

        csv.write_record([
            id.as_str(),
            date.as_str(),
            expense.category_label(),
            expense.note.as_deref().unwrap_or(""),
            amount.as_str(),
        ])?;
    }

    csv.flush().map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountField, ExpenseId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_rows() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut broken = Expense::new(ExpenseId::new(2), Money::zero(), "", day);
        broken.amount = AmountField::Text("abc".into());

        let expenses = vec![
            Expense::new(ExpenseId::new(1), Money::from_cents(1250), "Food", day)
                .with_note("lunch, with \"friends\""),
            broken,
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Note,Amount");
        assert_eq!(lines[1], "1,2024-03-10,Food,\"lunch, with \"\"friends\"\"\",12.50");
        assert_eq!(lines[2], "2,2024-03-10,Other,,0.00");
    }

    #[test]
    fn test_export_empty() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ID,Date,Category,Note,Amount\n");
    }
}
