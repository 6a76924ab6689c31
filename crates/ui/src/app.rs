//! Root application component
//!
//! Wires configuration, translations and the version predicate into
//! context and renders the database settings step.

use dioxus::prelude::*;
use wizard_core::{Translations, WizardConfig};

use crate::pages::DatabaseSettingsPage;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let config = try_use_context::<WizardConfig>().unwrap_or_default();
    let strings = try_use_context::<Translations>().unwrap_or_default();
    let predicate = use_hook({
        let config = config.clone();
        move || config.release_predicate()
    });

    use_context_provider(|| strings);

    use_effect(|| {
        tracing::info!("universe wizard UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            DatabaseSettingsPage {
                releases: config.releases.clone(),
                predicate,
                config: config.field.clone(),
            }
        }
    }
}
