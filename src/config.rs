// src/config.rs
// =============================================================================
// The site context object.
//
// Everything the fetch/render flow needs to know about "whose portfolio is
// this" lives here and is passed in explicitly. Nothing reads a global.
// =============================================================================

use url::Url;

/// GitHub account whose repositories are showcased by default
pub const DEFAULT_OWNER: &str = "gajedi1";

/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Public GitHub web UI, used for the "View on GitHub" profile link
pub const PROFILE_BASE: &str = "https://github.com";

/// Page size requested from the listing endpoint
pub const LISTING_PAGE_SIZE: usize = 6;

/// Most cards ever rendered
pub const MAX_PROJECTS: usize = 6;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub owner: String,
    pub api_base: Url,
}

impl SiteConfig {
    pub fn new(owner: impl Into<String>, api_base: Url) -> Self {
        SiteConfig {
            owner: owner.into(),
            api_base,
        }
    }

    // GET /users/{owner}/repos?sort=updated&per_page=6
    //
    // The owner goes in as a path segment so the url crate percent-encodes it
    pub fn listing_url(&self) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", self.owner.as_str(), "repos"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("sort", "updated")
            .append_pair("per_page", &LISTING_PAGE_SIZE.to_string());
        url
    }

    // https://github.com/{owner}?tab=repositories
    pub fn profile_url(&self) -> String {
        format!("{}/{}?tab=repositories", PROFILE_BASE, self.owner)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        // DEFAULT_API_BASE is a constant, known-good URL
        let api_base = Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL");
        SiteConfig::new(DEFAULT_OWNER, api_base)
    }
}
