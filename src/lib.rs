//! Spendbook - personal finance tracker
//!
//! This library tracks spending against monthly budget categories. Records
//! are grouped under month classifications and kept either in local JSON
//! files or behind a webhook-style HTTP API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Months, budgets, expenses, incomes and their value types
//! - `storage`: The repository contract and its local and remote backends
//! - `services`: Validation, lookups and ordering on top of storage
//! - `reports`: Budget spending, dashboard totals and month summaries
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `spendbook` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::config::{Settings, TrackerPaths};
//! use spendbook::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&settings, &paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
