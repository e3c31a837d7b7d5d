// src/render/container.rs
// =============================================================================
// The mount target every presenter writes into.
// =============================================================================

/// CSS selector of the element the project grid is mounted into
pub const GRID_SELECTOR: &str = ".projects-grid";

/// The single mount target of the projects section.
///
/// Presenters always `clear` it before mounting, so whichever fetch cycle ran
/// last owns the whole contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    html: String,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.html.clear();
    }

    pub fn mount(&mut self, fragment: &str) {
        self.html.push_str(fragment);
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// The container element itself, wrapping the current contents
    pub fn outer_html(&self) -> String {
        format!(
            "<div class=\"{}\">\n{}</div>\n",
            GRID_SELECTOR.trim_start_matches('.'),
            self.html
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_then_mount() {
        let mut container = Container::new();
        container.mount("<p>one</p>");
        container.mount("<p>two</p>");
        assert_eq!(container.html(), "<p>one</p><p>two</p>");

        container.clear();
        assert!(container.is_empty());
        container.mount("<p>three</p>");
        assert_eq!(container.html(), "<p>three</p>");
    }

    #[test]
    fn test_outer_html() {
        let mut container = Container::new();
        container.mount("<p>x</p>\n");
        assert_eq!(container.outer_html(), "<div class=\"projects-grid\">\n<p>x</p>\n</div>\n");
    }
}
