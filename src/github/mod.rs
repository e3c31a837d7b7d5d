// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub REST API.
//
// Submodules:
// - client: the HttpGet seam plus the reqwest-backed implementation
// - types: the repository payload we deserialize from the listing endpoint
//
// The rest of the crate only ever sees `HttpGet`, which is what lets the
// fetcher run against an in-memory fake in tests.
// =============================================================================

mod client;
mod types;

pub use client::{GitHubHttp, HttpGet, HttpResponse};
pub use types::RepositorySummary;
