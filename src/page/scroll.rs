// src/page/scroll.rs
// =============================================================================
// Scroll-driven page behavior as plain arithmetic.
//
// All positions are in CSS pixels. "Document" positions are measured from the
// top of the page; "viewport" positions from the top of the visible window.
// =============================================================================

/// Height of the fixed header that anchor scrolling must clear
pub const HEADER_OFFSET: f64 = 100.0;

/// Elements reveal once their top is this far above the viewport bottom
const REVEAL_MARGIN: f64 = 100.0;

/// Skill bars fill once their top is this far above the viewport bottom
const SKILL_BAR_MARGIN: f64 = 50.0;

/// Delay between consecutive staggered animations, in seconds
const STAGGER_STEP: f64 = 0.1;

/// The hero background moves at this fraction of the scroll speed
const PARALLAX_FACTOR: f64 = 0.5;

// A page section's id and its document-space box
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        SectionBox {
            id: id.into(),
            top,
            height,
        }
    }
}

// Scroll spy: which section the nav bar highlights
//
// A section counts as reached once the scroll position passes a third of the
// way into the section above it, i.e. `scroll_y >= top - height / 3`. The
// last reached section in document order wins.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - s.height / 3.0)
        .last()
        .map(|s| s.id.as_str())
}

// Where to smooth-scroll when an in-page link is clicked
//
// Parameters:
//   href: the link's href, e.g. "#about"
//   target_top: viewport-relative top of the target, None if it doesn't exist
//   scroll_y: current scroll position
//
// Returns: the document position to scroll to, or None to do nothing
pub fn anchor_scroll_target(href: &str, target_top: Option<f64>, scroll_y: f64) -> Option<f64> {
    if href == "#" {
        return None;
    }
    target_top.map(|top| top + scroll_y - HEADER_OFFSET)
}

// Reveal-on-scroll for `.animate-on-scroll` elements
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

// CSS width for a skill bar, once it is far enough into view
pub fn skill_bar_width(bar_top: f64, viewport_height: f64, skill_level: u8) -> Option<String> {
    if bar_top < viewport_height - SKILL_BAR_MARGIN {
        Some(format!("{}%", skill_level.min(100)))
    } else {
        None
    }
}

// Animation delay (seconds) of the n-th animated child in a section
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP
}

// Hero background `background-position-y`, in pixels
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}
