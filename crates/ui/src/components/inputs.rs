//! # Input Components
//!
//! Form inputs used by the database settings step:
//! - **Switch**: on/off toggle bound to a boolean form field
//! - **Checkbox**: boolean checkbox
//! - **Select**: dropdown selection
//!
//! Styling lives in `assets/styles/main.css`; components only pick classes.
//!

use dioxus::prelude::*;

// ============================================================================
// Switch Component
// ============================================================================

/// Properties for Switch component
#[derive(Props, Clone, PartialEq)]
pub struct SwitchProps {
    /// Whether on
    pub checked: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Accessible label
    #[props(default)]
    pub aria_label: Option<String>,

    /// Test hook forwarded to the control
    #[props(default)]
    pub test_id: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Switch-style toggle
///
/// Clicks are ignored while disabled, so the bound value never changes
/// through a disabled switch.
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let class = build_switch_class(props.checked, props.disabled);

    let handle_click = move |_| {
        if !props.disabled {
            props.on_change.call(!props.checked);
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "switch",
            "aria-checked": "{props.checked}",
            "aria-label": props.aria_label.clone().unwrap_or_default(),
            "data-testid": props.test_id.clone().unwrap_or_default(),
            disabled: props.disabled,
            onclick: handle_click,

            span { class: "switch-thumb" }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox",
            class: if props.disabled { "is-disabled" } else { "" },

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            if let Some(label) = &props.label {
                span { "{label}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            select {
                class: "select",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build switch class string
fn build_switch_class(checked: bool, disabled: bool) -> String {
    let mut classes = vec!["switch"];
    if checked {
        classes.push("is-on");
    }
    if disabled {
        classes.push("is-disabled");
    }
    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================
