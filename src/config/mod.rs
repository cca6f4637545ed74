//! Configuration module for Spendbook
//!
//! - Base/data directory resolution
//! - User settings persistence, including the storage backend choice

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{RemoteSettings, Settings, SettingsOverrides, StorageMode};
