// src/render/document.rs
// =============================================================================
// Loading spinner and the standalone page wrapper.
// =============================================================================

use super::container::Container;
use super::escape;

const LOADING_TEXT: &str = "Loading projects from GitHub...";

/// Mounts the spinner shown while a fetch cycle is in flight.
pub fn render_loading(container: &mut Container) {
    container.clear();
    container.mount(&format!(
        "<div class=\"loading-spinner\">\n    <div class=\"spinner\"></div>\n    <p>{}</p>\n</div>\n",
        LOADING_TEXT
    ));
}

/// Wraps the grid in a minimal standalone page.
///
/// The projects section gets `id="projects"` so in-page anchors such as
/// `#projects` resolve, and the grid keeps its `.projects-grid` class.
pub fn page_document(title: &str, owner: &str, container: &Container) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<section id="projects">
<h2>Projects by {owner}</h2>
{grid}</section>
</body>
</html>
"#,
        title = escape(title),
        owner = escape(owner),
        grid = container.outer_html(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_loading_replaces_content() {
        let mut container = Container::new();
        container.mount("<div class=\"api-error\"></div>");
        render_loading(&mut container);

        assert!(!container.html().contains("api-error"));
        assert!(container.html().contains(LOADING_TEXT));
    }

    #[test]
    fn test_page_has_grid_container() {
        let mut container = Container::new();
        container.mount("<div class=\"project-card\"><h3>A</h3></div>");
        let page = page_document("My <Portfolio>", "gajedi1", &container);

        let document = Html::parse_document(&page);
        let grid = Selector::parse("section#projects .projects-grid .project-card h3").unwrap();
        let title = Selector::parse("title").unwrap();

        assert_eq!(document.select(&grid).count(), 1);
        let title = document.select(&title).next().unwrap();
        assert_eq!(title.text().collect::<String>(), "My <Portfolio>");
    }
}
