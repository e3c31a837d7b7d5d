// src/lib.rs
// =============================================================================
// repo-showcase: render a GitHub user's best repositories as project cards.
//
// Flow:
//   SectionEvent::Ready -> fetch listing -> filter/rank -> enrich languages
//                       -> project cards, or an error panel with a retry
//
// Modules:
// - config: whose repositories, which API
// - error: the failure taxonomy
// - github: HTTP seam and payload types
// - projects: the fetch/filter/enrich pipeline and text helpers
// - render: HTML for cards, the error panel, loading state, whole page
// - section: the Idle/Loading/Displayed/Errored state machine
// - page: navigation and scroll behavior of the surrounding page
// =============================================================================

pub mod config;
pub mod error;
pub mod github;
pub mod page;
pub mod projects;
pub mod render;
pub mod section;

#[cfg(test)]
mod testing;

pub use config::SiteConfig;
pub use error::{FetchFailure, TransportError};
pub use section::{FlowState, ProjectsSection, SectionEvent};
