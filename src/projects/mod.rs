// src/projects/mod.rs
// =============================================================================
// This module turns a GitHub account into an ordered list of project records.
//
// Submodules:
// - format: repository identifier -> display title, description truncation
// - languages: per-repository language lookup that never fails outward
// - fetch: list, filter, rank, and enrich (the whole pipeline)
// =============================================================================

mod fetch;
mod format;
mod languages;

pub use fetch::{fetch_projects, select_eligible, EnrichedRepository};
pub use format::{format_name, truncate_description, MAX_DESCRIPTION_CHARS};
pub use languages::{resolve_languages, LanguageSet, SENTINEL_LANGUAGE};
