//! # Wizard UI
//!
//! Dioxus Desktop UI for the universe creation wizard's database settings
//! step.
//!
//! ## Features
//!
//! - PostgreSQL compatibility toggle gated on the selected database version
//! - Tooltip explaining why the toggle is unavailable, with a docs link
//! - Analyze dialog opened whenever the toggle is switched on
//! - Shared form context for named wizard fields
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use wizard_core;

// Re-export main components
pub use app::App;
pub use pages::DatabaseSettingsPage;
pub use state::{FormContext, FormValues, use_form_context, use_form_provider};

// Re-export components
pub use components::{
    AnalyzeDialog, Checkbox, EarlyAccessTag, PgCompatibilityField, RichText, Select,
    SelectOption, Switch, Tooltip,
};

// Re-export hooks
pub use hooks::{UseToggleField, use_toggle_field};

use wizard_core::{Translations, WizardConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Universe Wizard";

/// Application display title
pub const TITLE: &str = "Universe Wizard - Database Settings";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the wizard desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     let config = wizard_core::WizardConfig::default();
///     let strings = config.translations().unwrap_or_default();
///     wizard_ui::launch(config, strings);
/// }
/// ```
pub fn launch(config: WizardConfig, strings: Translations) {
    tracing::info!(
        releases = config.releases.len(),
        "Starting {} v{}",
        NAME,
        VERSION
    );

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 560.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 420.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(config)
        .with_context(strings)
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_cover_field_classes() {
        for class in [
            ".pg-compat-field",
            ".switch",
            ".tooltip-bubble",
            ".early-access-tag",
            ".dialog-overlay",
        ] {
            assert!(STYLES.contains(class), "missing {class}");
        }
    }
}
