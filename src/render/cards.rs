// src/render/cards.rs
// =============================================================================
// Renders enriched repositories as project cards.
//
// Each card has:
// - a folder glyph
// - an optional "live demo" link (only when a homepage is set)
// - a mandatory link to the repository page on GitHub
// - the formatted project name as heading
// - the description (placeholder when missing, cut at 120 chars)
// - up to 3 language tags plus a "+N more" tag listing the rest in its title
//
// Cards are appended exactly once each, in input order.
// =============================================================================

use super::container::Container;
use super::escape;
use crate::projects::{truncate_description, EnrichedRepository};

const NO_DESCRIPTION: &str = "No description available.";

// Clears the container and mounts one card per project
pub fn render_projects(container: &mut Container, projects: &[EnrichedRepository]) {
    container.clear();

    for (index, project) in projects.iter().enumerate() {
        container.mount(&project_card(index, project));
    }
}

fn project_card(index: usize, project: &EnrichedRepository) -> String {
    let repo = &project.repo;

    let description = truncate_description(repo.description.as_deref().unwrap_or(NO_DESCRIPTION));

    let live_link = match repo.homepage() {
        Some(homepage) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"View Live Demo\"><i class=\"fas fa-external-link-alt\"></i></a>",
            escape(homepage)
        ),
        None => String::new(),
    };

    // Staggers the fade-in: 0, 0.1, 0.2, ...
    let delay = index as f64 / 10.0;

    format!(
        r#"<div class="project-card animate-on-scroll" data-animation="fade-in-up" data-delay="{delay}">
    <div class="project-card-inner">
        <div class="project-header">
            <div class="project-folder"><i class="far fa-folder"></i></div>
            <div class="project-links">
                {live_link}
                <a href="{html_url}" target="_blank" rel="noopener noreferrer" title="View on GitHub"><i class="fab fa-github"></i></a>
            </div>
        </div>
        <h3>{name}</h3>
        <p>{description}</p>
        <div class="project-footer">
            <div class="project-languages">{tags}</div>
        </div>
    </div>
</div>
"#,
        delay = delay,
        live_link = live_link,
        html_url = escape(&repo.html_url),
        name = escape(&project.display_name()),
        description = escape(&description),
        tags = language_tags(project),
    )
}

fn language_tags(project: &EnrichedRepository) -> String {
    let mut tags = String::new();

    for language in project.languages.visible() {
        tags.push_str(&format!("<span class=\"tech-tag\">{}</span>", escape(language)));
    }

    let hidden = project.languages.hidden();
    if !hidden.is_empty() {
        tags.push_str(&format!(
            "<span class=\"tech-tag more-languages\" title=\"{}\">+{} more</span>",
            escape(&hidden.join(", ")),
            hidden.len()
        ));
    }

    tags
}
