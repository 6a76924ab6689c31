//! # Pages
//!
//! Wizard steps rendered by the application shell.

pub mod database_settings;

pub use database_settings::DatabaseSettingsPage;
