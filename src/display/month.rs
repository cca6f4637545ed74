//! Month display formatting

use tabled::Tabled;

use crate::models::MonthClassification;

use super::render_table;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Key")]
    month_num: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format months as a table, in the order given
pub fn format_month_list(months: &[MonthClassification]) -> String {
    if months.is_empty() {
        return "No months found.".to_string();
    }

    let rows: Vec<MonthRow> = months
        .iter()
        .map(|m| MonthRow {
            id: m.id.to_string(),
            month: m.month.clone(),
            month_num: m.month_num.to_string(),
            created: m.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    render_table(rows, &[])
}
