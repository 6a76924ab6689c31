//! # Early Access Tag
//!
//! Badge marking a feature as early access.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EarlyAccessTagProps {
    /// Badge text
    pub label: String,
}

#[component]
pub fn EarlyAccessTag(props: EarlyAccessTagProps) -> Element {
    rsx! {
        span {
            class: "early-access-tag",
            "data-testid": "YBEarlyAccessTag",
            "{props.label}"
        }
    }
}
