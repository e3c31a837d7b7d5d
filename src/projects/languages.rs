// src/projects/languages.rs
// =============================================================================
// Resolves the language list of a single repository.
//
// GitHub answers `GET {languages_url}` with an object mapping language name to
// byte count, largest first:
//   { "Rust": 50213, "Shell": 1200 }
// Only the key order matters to us.
//
// This lookup never fails outward. A missing language list must not take the
// whole page down, so every failure degrades to the sentinel ["Code"] and is
// logged at warn level.
// =============================================================================

use crate::github::{HttpGet, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Placeholder shown when no language data is obtainable
pub const SENTINEL_LANGUAGE: &str = "Code";

/// How many language tags a card shows before "+N more"
const VISIBLE_LANGUAGES: usize = 3;

// Ordered, never-empty list of language names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageSet(Vec<String>);

impl LanguageSet {
    /// ["Code"]
    pub fn sentinel() -> Self {
        LanguageSet(vec![SENTINEL_LANGUAGE.to_string()])
    }

    /// Keeps the given order; an empty list becomes the sentinel
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::sentinel()
        } else {
            LanguageSet(names)
        }
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_sentinel(&self) -> bool {
        self.0.len() == 1 && self.0[0] == SENTINEL_LANGUAGE
    }

    /// The tags rendered on the card
    pub fn visible(&self) -> &[String] {
        &self.0[..self.0.len().min(VISIBLE_LANGUAGES)]
    }

    /// The tags folded into the "+N more" indicator
    pub fn hidden(&self) -> &[String] {
        &self.0[self.0.len().min(VISIBLE_LANGUAGES)..]
    }
}

// Fetches and reduces a repository's language breakdown
//
// Parameters:
//   http: anything that can GET
//   repo_name: only used for log messages
//   languages_url: the `languages_url` field of the listing entry
//
// Returns: the language names in response order, or ["Code"]
pub async fn resolve_languages<C: HttpGet>(
    http: &C,
    repo_name: &str,
    languages_url: &str,
) -> LanguageSet {
    match http.get(languages_url).await {
        Ok(response) => match language_names(&response) {
            Ok(names) => LanguageSet::from_names(names),
            Err(reason) => {
                warn!(repo = repo_name, "Failed to fetch languages: {}", reason);
                LanguageSet::sentinel()
            }
        },
        Err(e) => {
            warn!(repo = repo_name, "Error fetching languages: {}", e);
            LanguageSet::sentinel()
        }
    }
}

fn language_names(response: &HttpResponse) -> Result<Vec<String>, String> {
    if !response.is_success() {
        return Err(format!("HTTP {}", response.status));
    }

    // serde_json's preserve_order feature keeps keys in document order
    let languages: Map<String, Value> =
        serde_json::from_str(&response.body).map_err(|e| e.to_string())?;

    Ok(languages.into_iter().map(|(name, _bytes)| name).collect())
}
