//! CLI commands for expense management

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_register};
use crate::error::ExpenseResult;
use crate::models::ExpenseId;
use crate::services::{parse_amount, parse_date, CreateExpenseInput, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

use super::{parse_filter, today};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category label (e.g., "Food")
        category: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,

        /// Date of the expense (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Filter: all, week or month
        #[arg(short, long)]
        filter: Option<String>,

        /// Show at most N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID (e.g., "3" or "#3")
        id: ExpenseId,
    },

    /// Change fields of an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New note (empty string clears it)
        #[arg(short, long)]
        note: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            note,
            date,
        } => {
            let input = CreateExpenseInput {
                amount: parse_amount(&amount)?,
                category,
                note,
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => today(),
                },
            };

            let expense = service.create(input)?;

            println!("Added expense #{}", expense.id);
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List { filter, limit } => {
            let mode = parse_filter(filter.as_deref(), settings)?;
            let mut expenses = service.list(mode, today())?;

            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            println!("Expenses ({})", mode.label());
            print!("{}", format_expense_register(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.require(id)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            note,
            date,
        } => {
            let input = UpdateExpenseInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                note,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            if input.is_empty() {
                println!("Nothing to change. Use --amount, --category, --note or --date.");
                return Ok(());
            }

            let expense = service.update(id, input)?;

            println!("Updated expense #{}", expense.id);
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!(
                "Deleted expense #{} ({} {})",
                removed.id,
                removed.category_label(),
                removed
                    .amount_value()
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
