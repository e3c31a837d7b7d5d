// src/projects/format.rs
// =============================================================================
// Small, pure text helpers used when building a card.
// =============================================================================

/// Descriptions longer than this are cut and get a "..." suffix
pub const MAX_DESCRIPTION_CHARS: usize = 120;

const ELLIPSIS: &str = "...";

// Converts a kebab-case identifier to a display title
//
// Splits on '-', upper-cases the first character of every segment and joins
// the segments with single spaces. Nothing else is touched, so the rest of
// each segment keeps its case and empty segments stay empty.
//
// Example:
//   "my-cool-project" -> "My Cool Project"
//   "rustAPI-v2"      -> "RustAPI V2"
pub fn format_name(identifier: &str) -> String {
    identifier
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Shortens a description to MAX_DESCRIPTION_CHARS characters plus "..."
//
// Counts characters, not bytes, so a multi-byte character is never split.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}
