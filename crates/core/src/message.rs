//! Rich translated messages
//!
//! Translated strings may embed a documentation link the way i18next `Trans`
//! markup does, either with an indexed tag (`<1>Learn more</1>`) or a named
//! one (`<link>Learn more</link>`). A message is split into text and link
//! segments so the UI can render the link as an anchor. Markup that does not
//! parse is kept as plain text.

use serde::{Deserialize, Serialize};

/// A piece of a rich message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSegment {
    /// Plain text
    Text(String),
    /// Documentation link with its visible label
    Link(String),
}

/// A translated message split into segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMessage {
    pub segments: Vec<TextSegment>,
}

impl RichMessage {
    /// Parse a translated string
    pub fn parse(input: &str) -> Self {
        let mut message = Self::default();
        let mut rest = input;

        while let Some(open) = rest.find('<') {
            let after_open = &rest[open + 1..];
            let Some(open_end) = after_open.find('>') else {
                break;
            };

            let tag = &after_open[..open_end];
            let body = &after_open[open_end + 1..];
            let close = format!("</{tag}>");

            match body.find(&close) {
                Some(close_at) if is_link_tag(tag) => {
                    message.push_text(&rest[..open]);
                    message.segments.push(TextSegment::Link(body[..close_at].to_string()));
                    rest = &body[close_at + close.len()..];
                }
                _ => {
                    // Not a link: keep the '<' as text and continue after it
                    message.push_text(&rest[..=open]);
                    rest = after_open;
                }
            }
        }

        message.push_text(rest);
        message
    }

    /// Make sure the message carries a link with a visible label
    ///
    /// Empty link labels are replaced with `default_label`; a message
    /// without any link gets one appended.
    pub fn linked(mut self, default_label: &str) -> Self {
        let mut has_link = false;
        for segment in &mut self.segments {
            if let TextSegment::Link(label) = segment {
                has_link = true;
                if label.trim().is_empty() {
                    *label = default_label.to_string();
                }
            }
        }

        if !has_link {
            if let Some(TextSegment::Text(text)) = self.segments.last_mut() {
                if !text.ends_with(char::is_whitespace) {
                    text.push(' ');
                }
            }
            self.segments
                .push(TextSegment::Link(default_label.to_string()));
        }

        self
    }

    /// Whether the message contains a link segment
    pub fn has_link(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, TextSegment::Link(_)))
    }

    /// Whether the message has no visible content
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| match s {
            TextSegment::Text(t) | TextSegment::Link(t) => t.is_empty(),
        })
    }

    /// The message without markup
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                TextSegment::Text(t) | TextSegment::Link(t) => t.as_str(),
            })
            .collect()
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(TextSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(TextSegment::Text(text.to_string()));
        }
    }
}

/// `link` or an i18next child index such as `1`
fn is_link_tag(tag: &str) -> bool {
    tag == "link" || (!tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> TextSegment {
        TextSegment::Text(s.to_string())
    }

    fn link(s: &str) -> TextSegment {
        TextSegment::Link(s.to_string())
    }

    #[test]
    fn test_parse_plain_text() {
        let msg = RichMessage::parse("No markup here");
        assert_eq!(msg.segments, vec![text("No markup here")]);
        assert!(!msg.has_link());
    }

    #[test]
    fn test_parse_indexed_link() {
        let msg = RichMessage::parse("Requires 2.20 or later. <1>Learn more</1>");
        assert_eq!(
            msg.segments,
            vec![text("Requires 2.20 or later. "), link("Learn more")]
        );
    }

    #[test]
    fn test_parse_named_link_mid_sentence() {
        let msg = RichMessage::parse("See <link>the docs</link> for details.");
        assert_eq!(
            msg.segments,
            vec![text("See "), link("the docs"), text(" for details.")]
        );
        assert_eq!(msg.plain_text(), "See the docs for details.");
    }

    #[test]
    fn test_parse_unclosed_tag_stays_text() {
        let msg = RichMessage::parse("Broken <1>link");
        assert_eq!(msg.segments, vec![text("Broken <1>link")]);
    }

    #[test]
    fn test_parse_unknown_tag_stays_text() {
        let msg = RichMessage::parse("a <b>bold</b> word");
        assert_eq!(msg.segments, vec![text("a <b>bold</b> word")]);
    }

    #[test]
    fn test_parse_stray_angle_bracket() {
        let msg = RichMessage::parse("versions < 2.20 <1>docs</1>");
        assert_eq!(msg.segments, vec![text("versions < 2.20 "), link("docs")]);
    }

    #[test]
    fn test_linked_appends_missing_link() {
        let msg = RichMessage::parse("Not supported.").linked("Learn more");
        assert_eq!(msg.segments, vec![text("Not supported. "), link("Learn more")]);
    }

    #[test]
    fn test_linked_fills_empty_label() {
        let msg = RichMessage::parse("Read <1></1>").linked("Learn more");
        assert_eq!(msg.segments, vec![text("Read "), link("Learn more")]);
    }

    #[test]
    fn test_linked_keeps_existing_label() {
        let msg = RichMessage::parse("<link>Docs</link>").linked("Learn more");
        assert_eq!(msg.segments, vec![link("Docs")]);
    }

    #[test]
    fn test_is_empty() {
        assert!(RichMessage::parse("").is_empty());
        assert!(!RichMessage::parse("x").is_empty());
        assert!(!RichMessage::parse("").linked("Docs").is_empty());
    }
}
