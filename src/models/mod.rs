//! Core data models for Spendbook
//!
//! Four record types (month classifications, budgets, expenses, incomes)
//! plus the value types they are built from.

pub mod budget;
pub mod dates;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;
pub mod record;

pub use budget::{Budget, BudgetPatch, CategoryType, NewBudget};
pub use expense::{Expense, ExpensePatch, NewExpense};
pub use ids::RecordId;
pub use income::{Income, IncomePatch, IncomeType, NewIncome};
pub use money::{Money, MoneyParseError};
pub use month::{MonthClassification, MonthNum, MonthNumError, MonthPatch, NewMonth};
pub use record::{Collection, Record, RecordFilter};
