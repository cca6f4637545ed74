//! Month CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::format_month_list;
use crate::error::TrackerResult;
use crate::services::MonthService;
use crate::storage::Storage;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Add a month classification
    Add {
        /// Label, e.g. "December 2026"
        name: String,
        /// Key in MM-YY form, e.g. "12-26"
        num: String,
    },

    /// Add the current calendar month if it doesn't exist yet
    Current,

    /// List months, newest first
    #[command(alias = "ls")]
    List,

    /// Edit a month
    Edit {
        /// Month ID, key or label
        month: String,
        /// New label
        #[arg(short, long)]
        name: Option<String>,
        /// New MM-YY key
        #[arg(long)]
        num: Option<String>,
    },

    /// Delete a month (expenses and incomes under it are kept)
    #[command(alias = "rm")]
    Delete {
        /// Month ID, key or label
        month: String,
    },
}

/// Handle a month command
pub fn handle_month_command(storage: &Storage, cmd: MonthCommands) -> TrackerResult<()> {
    let service = MonthService::new(storage);

    match cmd {
        MonthCommands::Add { name, num } => {
            let month = service.create(&name, &num)?;
            println!("Created month: {} ({})", month.month, month.month_num);
            println!("  ID: {}", month.id);
        }

        MonthCommands::Current => {
            let month = service.create_current(Local::now().date_naive())?;
            println!("Current month: {} ({})", month.month, month.month_num);
            println!("  ID: {}", month.id);
        }

        MonthCommands::List => {
            let months = service.list()?;
            println!("{}", format_month_list(&months));
        }

        MonthCommands::Edit { month, name, num } => {
            let target = service.resolve(&month)?;

            if name.is_none() && num.is_none() {
                println!("No changes specified. Use --name or --num.");
                return Ok(());
            }

            let updated = service.update(&target.id, name.as_deref(), num.as_deref())?;
            println!("Updated month: {} ({})", updated.month, updated.month_num);
        }

        MonthCommands::Delete { month } => {
            let target = service.resolve(&month)?;
            service.delete(&target.id)?;
            println!("Deleted month: {}", target.month);
        }
    }

    Ok(())
}
