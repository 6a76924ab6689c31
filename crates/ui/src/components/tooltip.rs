//! # Tooltip Component
//!
//! Hover bubble around a control. An empty tooltip renders the children
//! with no bubble at all.

use dioxus::prelude::*;
use wizard_core::Tooltip as TooltipContent;

use super::rich_text::RichText;

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    /// What to show; `Empty` suppresses the bubble
    pub tooltip: TooltipContent,

    /// Target of links inside the message
    #[props(default)]
    pub href: String,

    /// Wrapped control
    pub children: Element,
}

/// Tooltip wrapper
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let Some(message) = props.tooltip.message().cloned() else {
        return rsx! {
            div { class: "tooltip-anchor", {props.children} }
        };
    };

    rsx! {
        div {
            class: "tooltip-anchor tooltip",

            {props.children}

            div {
                class: "tooltip-bubble",
                role: "tooltip",
                RichText {
                    message,
                    href: props.href.clone(),
                    class: "tooltip-text",
                }
            }
        }
    }
}
