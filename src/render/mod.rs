// src/render/mod.rs
// =============================================================================
// This module turns records and failures into HTML fragments.
//
// Submodules:
// - container: the mount target every presenter writes into
// - cards: project grid (one card per repository)
// - error_panel: diagnostic panel with the retry control
// - document: loading spinner and the standalone page wrapper
//
// All text that came from GitHub is escaped before it lands in markup.
// =============================================================================

mod cards;
mod container;
mod document;
mod error_panel;

pub use cards::render_projects;
pub use container::Container;
pub use document::{page_document, render_loading};
pub use error_panel::{render_error, RETRY_ACTION};

// Minimal HTML escaping for text and attribute values
//
// Covers the five characters that can break out of a text node or a
// double- or single-quoted attribute.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }
}
