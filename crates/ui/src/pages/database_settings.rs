//! # Database Settings Page
//!
//! Demo host for the PostgreSQL compatibility field: a wizard step with a
//! release selector and a lock switch, both feeding the field's props.

use dioxus::prelude::*;
use wizard_core::{
    DATABASE_SETTINGS_NAMESPACE, FieldConfig, ReleaseEntry, SharedPredicate, Translations,
};

use crate::components::{Checkbox, PgCompatibilityField, Select, SelectOption};
use crate::state::{FormValues, use_form_provider};

#[derive(Props, Clone, PartialEq)]
pub struct DatabaseSettingsPageProps {
    /// Releases offered by the selector
    pub releases: Vec<ReleaseEntry>,

    /// Version support predicate handed to the field
    pub predicate: SharedPredicate,

    /// Field settings
    #[props(default)]
    pub config: FieldConfig,

    /// Values restored from earlier wizard state
    #[props(default)]
    pub initial: FormValues,
}

/// Database settings wizard step
#[component]
pub fn DatabaseSettingsPage(props: DatabaseSettingsPageProps) -> Element {
    let strings = try_use_context::<Translations>().unwrap_or_default();
    let t = strings.scope(DATABASE_SETTINGS_NAMESPACE);

    let initial = props.initial.clone();
    let form = use_form_provider(move || initial);

    let first_release = props
        .releases
        .first()
        .map(|r| r.version.clone())
        .unwrap_or_default();
    let mut db_version = use_signal(move || first_release);
    let mut locked = use_signal(|| false);

    let options = release_options(&props.releases);
    let field_name = props.config.field_name.clone();
    let enabled = form.watch(&field_name).unwrap_or(false);

    rsx! {
        div {
            class: "wizard-step",

            h1 { class: "wizard-title", {t.t("title")} }

            Select {
                value: db_version.read().clone(),
                options,
                label: t.t("dbVersion"),
                on_change: move |v: String| db_version.set(v),
            }

            Checkbox {
                checked: *locked.read(),
                label: t.t("readOnly"),
                on_change: move |v: bool| locked.set(v),
            }

            PgCompatibilityField {
                disabled: *locked.read(),
                db_version: db_version.read().clone(),
                predicate: props.predicate.clone(),
                config: props.config.clone(),
            }

            p {
                class: "wizard-summary",
                "data-testid": "DatabaseSettings-Summary",
                "{field_name} = {enabled}"
            }
        }
    }
}

/// Selector options, flagging releases with PostgreSQL compatibility
fn release_options(releases: &[ReleaseEntry]) -> Vec<SelectOption> {
    releases
        .iter()
        .map(|r| {
            let label = if r.pg_compatible {
                format!("{} (PG compatible)", r.version)
            } else {
                r.version.clone()
            };
            SelectOption::new(r.version.clone(), label)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
