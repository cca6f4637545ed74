//! Dashboard
//!
//! Income, expense and balance totals for a month (or all time), how much
//! of the combined monthly budget has been used, and the latest
//! transactions.

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{Budget, Expense, Income, Money, MonthClassification};
use crate::services::{budget_name, month_label};
use crate::storage::Storage;

use super::{MonthFilter, RECENT_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardTotals {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense
    pub balance: Money,
    /// Sum of every budget's monthly amount, regardless of month filter
    pub total_budget: Money,
    /// Expense as a percentage of `total_budget`; 0 when there is no budget
    pub budget_used: f64,
}

/// An expense or an income, for mixed listings
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Expense(Expense),
    Income(Income),
}

impl Transaction {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Expense(e) => e.date,
            Self::Income(i) => i.date,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Expense(e) => &e.expense,
            Self::Income(i) => &i.income,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Expense(e) => e.amount,
            Self::Income(i) => i.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }
}

/// Totals for the selected month
pub fn dashboard_totals(
    filter: &MonthFilter,
    budgets: &[Budget],
    expenses: &[Expense],
    incomes: &[Income],
) -> DashboardTotals {
    let total_expense: Money = filter.expenses(expenses).iter().map(|e| e.amount).sum();
    let total_income: Money = filter.incomes(incomes).iter().map(|i| i.amount).sum();
    let total_budget: Money = budgets.iter().map(|b| b.monthly_budget).sum();

    DashboardTotals {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        total_budget,
        budget_used: total_expense.percent_of(total_budget),
    }
}

/// The latest transactions, newest first
///
/// Expenses are collected before incomes and the sort is stable, so on equal
/// dates expenses come first and each side keeps its input order.
pub fn recent_transactions<'a, E, I>(expenses: E, incomes: I) -> Vec<Transaction>
where
    E: IntoIterator<Item = &'a Expense>,
    I: IntoIterator<Item = &'a Income>,
{
    let mut merged: Vec<Transaction> = expenses
        .into_iter()
        .cloned()
        .map(Transaction::Expense)
        .chain(incomes.into_iter().cloned().map(Transaction::Income))
        .collect();

    merged.sort_by(|a, b| b.date().cmp(&a.date()));
    merged.truncate(RECENT_LIMIT);
    merged
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub filter: MonthFilter,
    /// Label of the selected month, `None` for all time
    pub month_label: Option<String>,
    pub totals: DashboardTotals,
    pub recent: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub has_any_data: bool,
}

impl Dashboard {
    pub fn generate(storage: &Storage, filter: MonthFilter) -> TrackerResult<Self> {
        let months = storage.months.get_all()?;
        let budgets = storage.budgets.get_all()?;
        let expenses = storage.expenses.get_all()?;
        let incomes = storage.incomes.get_all()?;

        Ok(Self::from_collections(filter, &months, budgets, &expenses, &incomes))
    }

    pub fn from_collections(
        filter: MonthFilter,
        months: &[MonthClassification],
        budgets: Vec<Budget>,
        expenses: &[Expense],
        incomes: &[Income],
    ) -> Self {
        let totals = dashboard_totals(&filter, &budgets, expenses, incomes);
        let recent = recent_transactions(filter.expenses(expenses), filter.incomes(incomes));
        let month_label = match &filter {
            MonthFilter::All => None,
            MonthFilter::Month(id) => Some(month_label(months, id).to_string()),
        };

        Self {
            has_any_data: !(months.is_empty() && expenses.is_empty() && incomes.is_empty()),
            filter,
            month_label,
            totals,
            recent,
            budgets,
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        let scope = self.month_label.as_deref().unwrap_or("All time");
        output.push_str(&format!("Dashboard - {}\n", scope));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let totals = &self.totals;
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Income:",
            totals.total_income.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Expenses:",
            totals.total_expense.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Balance:",
            totals.balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>15.0}%\n",
            "Budget Used:", totals.budget_used
        ));

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.recent.is_empty() {
            output.push_str("No transactions yet\n");
        }

        for txn in &self.recent {
            let tag = match txn {
                Transaction::Expense(e) => budget_name(&self.budgets, &e.budget_id).to_string(),
                Transaction::Income(i) => i.kind.to_string(),
            };
            let sign = if txn.is_income() { "+" } else { "-" };
            output.push_str(&format!(
                "{}  {:<22} {:<14} {}{}\n",
                txn.date().format("%d %b %Y"),
                txn.name(),
                tag,
                sign,
                txn.amount().format_with_symbol(currency)
            ));
        }

        if !self.has_any_data {
            output.push_str(
                "\nGet started: add a month, create budget categories, then record expenses and incomes.\n",
            );
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryType, IncomeType, RecordId};
    use chrono::Utc;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
    }

    fn budget(id: &str, major: i64) -> Budget {
        Budget {
            id: RecordId::from(id),
            category: format!("Budget {}", id),
            monthly_budget: Money::from_major(major),
            category_type: CategoryType::Wants,
            created_at: Utc::now(),
        }
    }

    fn expense(name: &str, major: i64, day: u32, month: &str) -> Expense {
        Expense {
            id: RecordId::generate(),
            expense: name.into(),
            amount: Money::from_major(major),
            date: date(day),
            budget_id: RecordId::from("b-1"),
            month_classification_id: RecordId::from(month),
            created_at: Utc::now(),
        }
    }

    fn income(name: &str, major: i64, day: u32, month: &str) -> Income {
        Income {
            id: RecordId::generate(),
            income: name.into(),
            amount: Money::from_major(major),
            date: date(day),
            month_classification_id: RecordId::from(month),
            kind: IncomeType::Salary,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_for_month() {
        let incomes = vec![
            income("Pay", 100, 1, "m-1"),
            income("Bonus", 50, 2, "m-1"),
            income("Other month", 999, 3, "m-2"),
        ];
        let expenses = vec![expense("Food", 30, 4, "m-1"), expense("Later", 70, 5, "m-2")];
        let budgets = vec![budget("b-1", 200), budget("b-2", 100)];

        let totals = dashboard_totals(
            &MonthFilter::Month(RecordId::from("m-1")),
            &budgets,
            &expenses,
            &incomes,
        );
        assert_eq!(totals.total_income, Money::from_major(150));
        assert_eq!(totals.total_expense, Money::from_major(30));
        assert_eq!(totals.balance, Money::from_major(120));
        assert_eq!(totals.total_budget, Money::from_major(300));
        assert_eq!(totals.budget_used, 10.0);
    }

    #[test]
    fn test_totals_all_time_without_budgets() {
        let incomes = vec![income("Pay", 10, 1, "m-1")];
        let expenses = vec![expense("Food", 30, 4, "m-1"), expense("Later", 70, 5, "m-2")];

        let totals = dashboard_totals(&MonthFilter::All, &[], &expenses, &incomes);
        assert_eq!(totals.total_expense, Money::from_major(100));
        assert_eq!(totals.balance, Money::from_major(-90));
        assert_eq!(totals.budget_used, 0.0);
    }

    #[test]
    fn test_recent_transactions_take_five_newest() {
        let expenses = vec![
            expense("e3", 1, 3, "m-1"),
            expense("e6", 1, 6, "m-1"),
            expense("e1", 1, 1, "m-1"),
        ];
        let incomes = vec![
            income("i5", 1, 5, "m-1"),
            income("i2", 1, 2, "m-1"),
            income("i4", 1, 4, "m-1"),
        ];

        let recent = recent_transactions(&expenses, &incomes);
        let names: Vec<&str> = recent.iter().map(Transaction::name).collect();
        assert_eq!(names, vec!["e6", "i5", "i4", "e3", "i2"]);

        let mut reversed_expenses = expenses.clone();
        reversed_expenses.reverse();
        let mut reversed_incomes = incomes.clone();
        reversed_incomes.reverse();
        let again = recent_transactions(&reversed_expenses, &reversed_incomes);
        let names_again: Vec<&str> = again.iter().map(Transaction::name).collect();
        assert_eq!(names_again, names);
    }

    #[test]
    fn test_recent_ties_put_expenses_first() {
        let expenses = vec![expense("spent", 1, 7, "m-1")];
        let incomes = vec![income("earned", 1, 7, "m-1")];

        let recent = recent_transactions(&expenses, &incomes);
        assert!(!recent[0].is_income());
        assert!(recent[1].is_income());
        assert_eq!(recent[0].amount(), Money::from_major(1));
    }

    #[test]
    fn test_dashboard_filters_recent_by_month() {
        let months = vec![MonthClassification {
            id: RecordId::from("m-1"),
            month: "May 2026".into(),
            month_num: "05-26".parse().unwrap(),
            created_at: Utc::now(),
        }];
        let expenses = vec![expense("In May", 5, 4, "m-1"), expense("Elsewhere", 5, 9, "m-2")];

        let dashboard = Dashboard::from_collections(
            MonthFilter::Month(RecordId::from("m-1")),
            &months,
            vec![budget("b-1", 100)],
            &expenses,
            &[],
        );

        assert_eq!(dashboard.month_label.as_deref(), Some("May 2026"));
        assert_eq!(dashboard.recent.len(), 1);

        let output = dashboard.format_terminal("RM");
        assert!(output.contains("Dashboard - May 2026"));
        assert!(output.contains("In May"));
        assert!(output.contains("Budget b-1"));
        assert!(!output.contains("Elsewhere"));
    }

    #[test]
    fn test_empty_dashboard_shows_getting_started() {
        let dashboard = Dashboard::from_collections(MonthFilter::All, &[], vec![], &[], &[]);
        let output = dashboard.format_terminal("RM");
        assert!(output.contains("No transactions yet"));
        assert!(output.contains("Get started"));
    }
}
