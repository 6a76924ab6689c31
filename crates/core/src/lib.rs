//! # Wizard Core
//!
//! Renderer-independent logic for the universe creation wizard's
//! PostgreSQL compatibility field.
//!
//! This crate provides:
//!
//! - **Controller**: toggle enablement, tooltip selection and the analyze
//!   dialog state machine (`FieldView`, `ToggleFieldController`)
//! - **Traits**: the host-supplied `VersionSupportPredicate`
//! - **Translations**: i18next-style bundles and rich messages with links
//! - **Config**: TOML configuration and the demo release catalog
//! - **Errors**: `WizardError` and `WizardResult`
//!

pub mod config;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod message;
pub mod traits;

// Re-export commonly used items at crate root
pub use config::{
    FieldConfig, PG_COMPATIBILITY_DOCS_URL, PG_COMPATIBILITY_FIELD, ReleaseEntry, WizardConfig,
};
pub use controller::{
    FieldView, ToggleFieldController, Tooltip, TransitionWatcher, effective_disabled,
};
pub use error::{WizardError, WizardResult};
pub use i18n::{
    ANALYZE_DIALOG_NAMESPACE, DATABASE_SETTINGS_NAMESPACE, PG_COMPATIBILITY_NAMESPACE, Scope,
    Translations,
};
pub use message::{RichMessage, TextSegment};
pub use traits::{Fallible, SharedPredicate, VersionSupportPredicate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
