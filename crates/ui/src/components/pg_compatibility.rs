//! # PostgreSQL Compatibility Field
//!
//! Toggle of the database settings step that turns on PostgreSQL
//! compatibility for the universe being created.
//!
//! ## Behavior
//!
//! - The toggle is bound to the `enablePGCompatibitilty` form field
//! - It is disabled when the step is read-only or the selected database
//!   version does not support the feature
//! - Unsupported versions get a tooltip explaining why, with a docs link
//! - Switching the toggle on after mount opens the analyze dialog
//! - A version change never resets the field value
//!

use dioxus::prelude::*;
use wizard_core::{
    ANALYZE_DIALOG_NAMESPACE, FieldConfig, FieldView, SharedPredicate, Translations,
};

use super::dialogs::AnalyzeDialog;
use super::early_access_tag::EarlyAccessTag;
use super::inputs::Switch;
use super::rich_text::RichText;
use super::tooltip::Tooltip;
use crate::hooks::use_toggle_field;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PgCompatibilityFieldProps {
    /// Disabled by the enclosing step, e.g. when it is read-only
    #[props(default = false)]
    pub disabled: bool,

    /// Database version selected elsewhere in the wizard
    pub db_version: String,

    /// Decides which versions support PostgreSQL compatibility
    pub predicate: SharedPredicate,

    /// Field name and documentation link
    #[props(default)]
    pub config: FieldConfig,
}

// ============================================================================
// Main Component
// ============================================================================

/// PostgreSQL compatibility toggle with its analyze dialog
#[component]
pub fn PgCompatibilityField(props: PgCompatibilityFieldProps) -> Element {
    let strings = try_use_context::<Translations>().unwrap_or_default();
    let field = use_toggle_field(&props.config.field_name);

    let view = FieldView::derive(props.disabled, &props.db_version, &props.predicate, &strings);
    let dialog = strings.scope(ANALYZE_DIALOG_NAMESPACE);
    let docs_url = props.config.docs_url.clone();

    let dialog_body = dialog.t("body");
    let is_on = field.is_on();
    let dialog_open = field.is_dialog_open();

    let field_for_toggle = field.clone();
    let field_for_dialog = field.clone();

    rsx! {
        div {
            class: "pg-compat-field",
            "data-testid": "PGCompatibiltyField-Container",

            Tooltip {
                tooltip: view.tooltip.clone(),
                href: docs_url.clone(),

                Switch {
                    checked: is_on,
                    disabled: view.effective_disabled,
                    aria_label: view.label.clone(),
                    test_id: "PGCompatibiltyField-Toggle",
                    on_change: move |value: bool| field_for_toggle.set(value),
                }
            }

            div {
                class: "pg-compat-text",

                div {
                    class: "pg-compat-heading",
                    span { class: "pg-compat-label", "{view.label}" }
                    EarlyAccessTag { label: view.early_access.clone() }
                }

                RichText {
                    message: view.sub_text.clone(),
                    href: docs_url.clone(),
                }
            }

            AnalyzeDialog {
                open: dialog_open,
                on_close: move |_| field_for_dialog.close_dialog(),
                title: dialog.t("title"),
                close_label: dialog.t("close"),

                p { class: "dialog-text", "{dialog_body}" }
            }
        }
    }
}
