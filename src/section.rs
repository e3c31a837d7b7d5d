// src/section.rs
// =============================================================================
// The projects section: one container, one state machine.
//
//   Idle --Ready--> Loading --> Displayed        (terminal until reload)
//                           \-> Errored --Retry--> Loading --> ...
//
// Every transition into Loading clears the container and mounts the spinner,
// so the cycle that ran last always owns the whole container. Events that
// don't apply to the current state are ignored.
// =============================================================================

use crate::config::SiteConfig;
use crate::error::FetchFailure;
use crate::github::HttpGet;
use crate::projects::{fetch_projects, EnrichedRepository};
use crate::render::{render_error, render_loading, render_projects, Container};
use tracing::{debug, error, info};

// What the host can tell the section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    /// The page finished loading
    Ready,
    /// The error panel's retry button was activated
    Retry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Idle,
    Loading,
    Displayed { projects: Vec<EnrichedRepository> },
    Errored { failure: FetchFailure },
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::Loading => "loading",
            FlowState::Displayed { .. } => "displayed",
            FlowState::Errored { .. } => "errored",
        }
    }

    // Which events this state reacts to
    fn accepts(&self, event: SectionEvent) -> bool {
        matches!(
            (self, event),
            (FlowState::Idle, SectionEvent::Ready) | (FlowState::Errored { .. }, SectionEvent::Retry)
        )
    }
}

pub struct ProjectsSection<C> {
    http: C,
    config: SiteConfig,
    container: Container,
    state: FlowState,
}

impl<C: HttpGet> ProjectsSection<C> {
    pub fn new(http: C, config: SiteConfig) -> Self {
        ProjectsSection {
            http,
            config,
            container: Container::new(),
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    // Feeds one event into the state machine
    //
    // Returns: the state after the event has been fully handled
    pub async fn handle(&mut self, event: SectionEvent) -> &FlowState {
        if self.state.accepts(event) {
            self.load().await;
        } else {
            debug!(?event, state = self.state.name(), "Event ignored");
        }
        &self.state
    }

    // One full fetch cycle: spinner, fetch, then grid or error panel
    async fn load(&mut self) {
        self.state = FlowState::Loading;
        render_loading(&mut self.container);
        info!(owner = %self.config.owner, "Loading projects from GitHub...");

        match fetch_projects(&self.http, &self.config).await {
            Ok(projects) => {
                render_projects(&mut self.container, &projects);
                info!(count = projects.len(), "Projects displayed");
                self.state = FlowState::Displayed { projects };
            }
            Err(failure) => {
                error!(status = ?failure.status(), "GitHub API error: {}", failure);
                render_error(&mut self.container, &failure, &self.config.profile_url());
                self.state = FlowState::Errored { failure };
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is ProjectsSection generic over C?
//    - In production C is GitHubHttp (real network)
//    - In tests C is FakeHttp (scripted responses)
//    - The state machine itself doesn't care which one it talks to
//
// 2. Why does handle() take &mut self?
//    - It rewrites the container and the state
//    - Only one cycle can hold &mut at a time, so two cycles can never write
//      into the container at once
// -----------------------------------------------------------------------------
