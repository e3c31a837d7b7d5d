// src/render/error_panel.rs
// =============================================================================
// Renders a FetchFailure as the "Project Loading Failed" panel.
//
// The panel replaces the whole grid: no partial results are shown when the
// listing itself failed. It always carries a retry button; whoever hosts the
// markup binds `data-action="retry"` back to the projects section.
// =============================================================================

use super::container::Container;
use super::escape;
use crate::error::FetchFailure;

/// Value of the retry button's `data-action` attribute
pub const RETRY_ACTION: &str = "retry";

const POSSIBLE_CAUSES: [&str; 4] = [
    "You might be behind a VPN or firewall blocking the request",
    "GitHub API rate limits might be in effect",
    "There could be temporary network connectivity issues",
    "The GitHub service might be temporarily unavailable",
];

const WARNING_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line><line x1="12" y1="16" x2="12.01" y2="16"></line></svg>"#;

const RETRY_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21.5 2v6h-6M21.34 15.57a10 10 0 1 1-.57-8.38"/></svg>"#;

// Clears the container and mounts the error panel
//
// Parameters:
//   container: the grid mount target
//   failure: why loading failed
//   profile_url: the owner's GitHub repositories page
pub fn render_error(container: &mut Container, failure: &FetchFailure, profile_url: &str) {
    container.clear();

    let causes: String = POSSIBLE_CAUSES
        .iter()
        .map(|cause| format!("<li>{}</li>", cause))
        .collect();

    container.mount(&format!(
        r#"<div class="api-error">
    <div class="error-icon">{icon}</div>
    <h3 class="error-title">Project Loading Failed</h3>
    <div class="error-message">
        <p>We encountered an issue while fetching projects from GitHub. Here are some possible causes:</p>
        <ul>{causes}</ul>
        {detail}
        <div class="action-buttons">
            <a href="{profile_url}" target="_blank" rel="noopener noreferrer" class="github-button"><i class="fab fa-github"></i> View on GitHub</a>
        </div>
        <p class="small-note"><i class="fas fa-info-circle"></i> This is a client-side application. For the best experience, ensure you have a stable internet connection.</p>
    </div>
    <div class="action-buttons">
        <button class="retry-button" data-action="{retry}">{retry_icon} Try Again</button>
    </div>
</div>
"#,
        icon = WARNING_ICON,
        causes = causes,
        detail = detail_block(failure),
        profile_url = escape(profile_url),
        retry = RETRY_ACTION,
        retry_icon = RETRY_ICON,
    ));
}

// The one part of the panel that depends on the failure
fn detail_block(failure: &FetchFailure) -> String {
    if failure.is_rate_limited() {
        return r#"<div class="error-detail"><strong>Status:</strong> Rate Limited<p>GitHub has rate limited the API. Please try again later or check your network settings.</p></div>"#
            .to_string();
    }

    let server_note = match failure.server_message() {
        Some(message) => format!("<p>GitHub says: {}</p>", escape(message)),
        None => String::new(),
    };

    format!(
        r#"<div class="error-detail"><strong>Error:</strong> {}{}</div>"#,
        escape(&failure.to_string()),
        server_note
    )
}
