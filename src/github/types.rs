// src/github/types.rs
// =============================================================================
// The repository payload returned by the GitHub listing endpoint.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /users/{owner}/repos`.
///
/// Only the fields the showcase uses are kept; serde ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository identifier, unique per owner (e.g. `my-cool-project`)
    pub name: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    /// Endpoint returning `{ "Rust": 12345, ... }` for this repository
    pub languages_url: String,
}

impl RepositorySummary {
    /// Forks and archived repositories never make it onto the page
    pub fn is_eligible(&self) -> bool {
        !self.fork && !self.archived
    }

    /// The live demo link, if one is set (GitHub sends "" for cleared homepages)
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|url| !url.trim().is_empty())
    }
}
