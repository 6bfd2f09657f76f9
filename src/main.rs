use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_summary_command,
    today, ExpenseCommands, ExportFormat,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Student expense tracker",
    long_about = "Track day-to-day spending from the terminal. Record expenses by \
                  category and see totals for this week, this month or all time."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show totals by category
    Summary {
        /// Filter: all, week or month
        #[arg(short, long)]
        filter: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export expenses to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short = 'F', long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Filter: all, week or month
        #[arg(short, long)]
        filter: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage, backfilling rows that predate the date column
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    let migrated = storage.load_all(today())?;
    if migrated > 0 {
        eprintln!("Assigned today's date to {} expense(s) without one.", migrated);
    }

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses add 12.50 Food' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.expenses_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default filter:  {}", settings.default_filter);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary { filter, output }) => {
            handle_summary_command(&storage, &settings, filter, output)?;
        }
        Some(Commands::Export {
            output,
            format,
            filter,
            pretty,
        }) => {
            handle_export_command(&storage, &settings, output, format, filter, pretty)?;
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&storage, count)?;
        }
        None => {
            println!("Expense tracker - student spending from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
