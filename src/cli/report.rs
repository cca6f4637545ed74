//! Dashboard and month summary commands

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::reports::{Dashboard, MonthFilter, MonthSummary};
use crate::services::MonthService;
use crate::storage::Storage;

/// Show the dashboard for one month (ID, key or label) or for all time
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> TrackerResult<()> {
    let filter = match month.as_deref().unwrap_or("all").parse::<MonthFilter>() {
        Ok(MonthFilter::Month(identifier)) => {
            let month = MonthService::new(storage).resolve(identifier.as_str())?;
            MonthFilter::Month(month.id)
        }
        _ => MonthFilter::All,
    };

    let dashboard = Dashboard::generate(storage, filter)?;
    print!("{}", dashboard.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Show totals for one month broken down by budget and income type
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: &str,
) -> TrackerResult<()> {
    let month = MonthService::new(storage).resolve(month)?;
    let summary = MonthSummary::generate(storage, &month)?;
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}
