use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendbook::cli::{
    handle_budget_command, handle_dashboard_command, handle_expense_command,
    handle_income_command, handle_month_command, handle_summary_command,
};
use spendbook::config::{Settings, SettingsOverrides, StorageMode, TrackerPaths};
use spendbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Personal finance tracker for monthly budgets, expenses and incomes",
    long_about = "Spendbook tracks what you spend against monthly budget categories. \
                  Expenses and incomes are grouped by month, and data lives either in \
                  local JSON files or behind a webhook API."
)]
struct Cli {
    /// Storage backend: local or remote
    #[arg(long, global = true, env = "SPENDBOOK_STORAGE")]
    storage: Option<StorageMode>,

    /// Base URL of the remote API
    #[arg(long, global = true, env = "SPENDBOOK_API_URL")]
    api_url: Option<String>,

    /// Key sent as X-API-Key to the remote API
    #[arg(long, global = true, env = "SPENDBOOK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month classification commands
    #[command(subcommand)]
    Month(spendbook::cli::MonthCommands),

    /// Budget category commands
    #[command(subcommand)]
    Budget(spendbook::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(spendbook::cli::ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(spendbook::cli::IncomeCommands),

    /// Totals, budget usage and recent transactions
    Dashboard {
        /// Month ID, key or label, or "all"
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Totals for one month by budget and income type
    Summary {
        /// Month ID, key or label
        month: String,
    },

    /// Write the settings file and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spendbook=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(SettingsOverrides {
        storage: cli.storage,
        api_url: cli.api_url,
        api_key: cli.api_key,
    });

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Spendbook - personal finance tracker");
            println!();
            println!("Run 'spendbook --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing Spendbook at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  spendbook month current");
            println!("  spendbook budget add Groceries 500 --type Needs");
            println!("  spendbook expense add \"Weekly shop\" 85.50 --budget Groceries");
        }
        Commands::Config => {
            println!("Spendbook Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Storage:        {}", settings.storage);
            println!("  API URL:        {}", settings.remote.base_url);
            println!(
                "  API key:        {}",
                if settings.remote.api_key.is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            println!("  Currency:       {}", settings.currency_symbol);
        }
        command => {
            let storage = Storage::open(&settings, &paths)?;

            match command {
                Commands::Month(cmd) => handle_month_command(&storage, cmd)?,
                Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
                Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
                Commands::Income(cmd) => handle_income_command(&storage, &settings, cmd)?,
                Commands::Dashboard { month } => {
                    handle_dashboard_command(&storage, &settings, month)?
                }
                Commands::Summary { month } => {
                    handle_summary_command(&storage, &settings, &month)?
                }
                Commands::Init | Commands::Config => {}
            }
        }
    }

    Ok(())
}
