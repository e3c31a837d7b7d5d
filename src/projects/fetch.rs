// src/projects/fetch.rs
// =============================================================================
// The project pipeline: list -> classify -> filter/rank -> enrich.
//
// Steps:
// 1. GET the owner's repositories, most recently updated first (6 per page)
// 2. Non-2xx? Fail with FetchFailure::Http (status, reason, server message)
// 3. Body not JSON? Fail with FetchFailure::Parse
// 4. Not a list, or an empty one? Fail with FetchFailure::Empty
// 5. Drop forks and archived repos, sort by stars, keep 6.
//    Nothing left? Fail with FetchFailure::NoEligible
// 6. Look up every survivor's languages at the same time and wait for ALL of
//    them to settle. A failed lookup only degrades that one repository.
//
// Nothing here retries. Retrying means calling fetch_projects again.
// =============================================================================

use crate::config::{SiteConfig, MAX_PROJECTS};
use crate::error::FetchFailure;
use crate::github::{HttpGet, RepositorySummary};
use crate::projects::format::format_name;
use crate::projects::languages::{resolve_languages, LanguageSet};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

// A repository plus its resolved languages, ready to become a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRepository {
    #[serde(flatten)]
    pub repo: RepositorySummary,
    pub languages: LanguageSet,
}

impl EnrichedRepository {
    pub fn display_name(&self) -> String {
        format_name(&self.repo.name)
    }
}

// GitHub error bodies look like {"message": "...", "documentation_url": "..."}
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

// Fetches, ranks and enriches the owner's repositories
//
// Parameters:
//   http: anything that can GET (reqwest in production, a fake in tests)
//   config: whose repositories, and which API to ask
//
// Returns: at most 6 records in star-rank order, or the reason there are none
pub async fn fetch_projects<C: HttpGet>(
    http: &C,
    config: &SiteConfig,
) -> Result<Vec<EnrichedRepository>, FetchFailure> {
    let url = config.listing_url();
    debug!(%url, "Requesting repository listing");

    // A transport error converts straight into FetchFailure::Transport
    let response = http.get(url.as_str()).await?;

    if !response.is_success() {
        // The error body is optional; a broken one counts as "no message"
        let body: ApiErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
        return Err(FetchFailure::Http {
            status: response.status,
            status_text: response.status_text,
            message: body.message,
        });
    }

    let body: Value =
        serde_json::from_str(&response.body).map_err(|e| FetchFailure::Parse(e.to_string()))?;

    let entries = match body {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => return Err(FetchFailure::Empty),
    };

    let repos = entries
        .into_iter()
        .map(serde_json::from_value::<RepositorySummary>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FetchFailure::Parse(e.to_string()))?;

    let eligible = select_eligible(repos);
    if eligible.is_empty() {
        return Err(FetchFailure::NoEligible);
    }

    debug!(
        repos = ?eligible.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "Filtered repositories"
    );

    Ok(enrich(http, eligible).await)
}

// Drops forks and archived repos, then ranks by stars (most first)
//
// `sort_by` is stable, so equal star counts keep their listing order.
pub fn select_eligible(repos: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    let mut eligible: Vec<_> = repos.into_iter().filter(|r| r.is_eligible()).collect();
    eligible.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    eligible.truncate(MAX_PROJECTS);
    eligible
}

// Fan-out / fan-in over the language lookups
//
// Every lookup is issued up front and join_all waits for all of them. Because
// resolve_languages is infallible there is no early exit: each slot settles
// to either real languages or the sentinel. join_all keeps input order, so the
// star ranking survives.
async fn enrich<C: HttpGet>(http: &C, repos: Vec<RepositorySummary>) -> Vec<EnrichedRepository> {
    let lookups = repos.into_iter().map(|repo| async move {
        let languages = resolve_languages(http, &repo.name, &repo.languages_url).await;
        EnrichedRepository { repo, languages }
    });

    join_all(lookups).await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why join_all and not buffer_unordered?
//    - buffer_unordered yields results as they finish, in any order
//    - join_all waits for every future and returns results in input order
//    - We need the star ranking preserved, so input order matters here
//
// 2. Why does one failed language lookup not fail everything?
//    - resolve_languages returns LanguageSet, not Result
//    - There is simply no error value that could short-circuit the join
//
// 3. What does `async move` capture in enrich()?
//    - `repo` (owned, moved into the future) and `http` (a shared reference)
//    - Shared references are Copy, so every future gets its own copy of it
// -----------------------------------------------------------------------------
