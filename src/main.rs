use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_export_command, handle_list_command, handle_report_command,
    AddArgs, ExportArgs, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::services::ExpenseTracker;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and report totals by category or date",
    long_about = "Records expenses to a JSON ledger (with a plain-text copy next to it) \
                  and reports how much was spent per category or per date."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense (missing fields are prompted for)
    Add(AddArgs),

    /// List all expenses in the order they were added
    #[command(alias = "ls")]
    List,

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut tracker = ExpenseTracker::open(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut tracker, &settings, args)?,
        Some(Commands::List) => handle_list_command(&tracker, &settings)?,
        Some(Commands::Report(cmd)) => handle_report_command(&tracker, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&tracker, args)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Tracker directory: {}", paths.base_dir().display());
            println!("Ledger file:       {}", paths.expenses_file().display());
            println!("Text mirror:       {}", paths.mirror_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Decimal places:  {}", settings.decimal_places);
            println!("  Date format:     {}", settings.default_date_format);
            println!();
            println!("Expenses recorded: {}", tracker.ledger().len());
        }
        None => {
            println!("Expense Tracker - record expenses and see where the money goes");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add' to record your first expense.");
        }
    }

    Ok(())
}
