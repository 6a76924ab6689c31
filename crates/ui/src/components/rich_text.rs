//! # Rich Text Component
//!
//! Renders a translated [`RichMessage`], turning link segments into anchors
//! that open the documentation in a new window.

use dioxus::prelude::*;
use wizard_core::{RichMessage, TextSegment};

#[derive(Props, Clone, PartialEq)]
pub struct RichTextProps {
    /// Parsed message
    pub message: RichMessage,

    /// Target of every link segment
    pub href: String,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Paragraph of text with embedded documentation links
#[component]
pub fn RichText(props: RichTextProps) -> Element {
    let class = props.class.as_deref().unwrap_or("sub-text");

    rsx! {
        p {
            class: "{class}",
            for segment in props.message.segments.iter() {
                if let TextSegment::Link(label) = segment {
                    a {
                        class: "doc-link",
                        href: "{props.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                } else if let TextSegment::Text(text) = segment {
                    span { "{text}" }
                }
            }
        }
    }
}
