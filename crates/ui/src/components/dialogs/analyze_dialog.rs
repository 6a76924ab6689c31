//! # Analyze Dialog Component
//!
//! Modal shown after PostgreSQL compatibility is switched on. The dialog is
//! a shell: the host supplies its body, and closing is reported through
//! `on_close` so the owner decides what visibility means.
//!
//! The dialog closes on:
//! - the close button
//! - a click on the backdrop
//! - the Escape key
//!
//! The close button takes focus when the dialog opens, otherwise key events
//! stay with whatever control opened it and Escape never reaches the overlay.
//!

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AnalyzeDialogProps {
    /// Whether the dialog is visible
    pub open: bool,

    /// Called when the user dismisses the dialog
    #[props(default)]
    pub on_close: EventHandler<()>,

    /// Dialog title
    #[props(default)]
    pub title: String,

    /// Close button text
    #[props(default = "Close".to_string())]
    pub close_label: String,

    /// Focus the close button when the dialog opens
    #[props(default = true)]
    pub autofocus: bool,

    /// Dialog body
    pub children: Element,
}

/// Analyze dialog shell
#[component]
pub fn AnalyzeDialog(props: AnalyzeDialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "dialog-overlay",
            "data-testid": "AnalyzeDialog",
            tabindex: "-1",
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: move |_| on_close.call(()),
            }

            // Dialog content
            div {
                class: "dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                if !props.title.is_empty() {
                    h2 { class: "dialog-title", "{props.title}" }
                }

                div {
                    class: "dialog-body",
                    {props.children}
                }

                div {
                    class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "button-primary",
                        "data-testid": "AnalyzeDialog-Close",
                        autofocus: props.autofocus,
                        onclick: move |_| on_close.call(()),
                        "{props.close_label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{AttributeValue, Mutation};

    #[component]
    fn Host(open: bool, autofocus: bool) -> Element {
        rsx! {
            AnalyzeDialog {
                open,
                autofocus,
                title: "Run ANALYZE",
                p { "body" }
            }
        }
    }

    fn autofocus_values(open: bool, autofocus: bool) -> Vec<AttributeValue> {
        let mut dom = VirtualDom::new_with_props(Host, HostProps { open, autofocus });
        dom.rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: "autofocus",
                    value,
                    ..
                } => Some(value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_close_button_takes_focus_when_open() {
        assert_eq!(autofocus_values(true, true), vec![AttributeValue::Bool(true)]);
    }

    #[test]
    fn test_autofocus_can_be_turned_off() {
        assert!(
            !autofocus_values(true, false)
                .iter()
                .any(|v| *v == AttributeValue::Bool(true))
        );
    }

    #[test]
    fn test_closed_dialog_renders_nothing() {
        assert!(autofocus_values(false, true).is_empty());
    }
}
