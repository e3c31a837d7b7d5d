// src/github/client.rs
// =============================================================================
// The HTTP layer.
//
// `HttpGet` is the only thing the fetch pipeline knows about the network:
// give it a URL, get back a status line and a body (or a TransportError if
// no response ever arrived). Deciding what a status MEANS is the caller's job.
//
// Rust concepts:
// - Traits: an interface the fetcher is generic over
// - async fn in traits: lets implementations await inside `get`
// =============================================================================

use crate::error::TransportError;
use reqwest::Client;
use std::time::Duration;

// A fully-read HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// 2xx, same as `fetch`'s `response.ok`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Anything that can perform a GET and hand back the whole response
#[allow(async_fn_in_trait)]
pub trait HttpGet {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

// The real client
//
// reqwest::Client is reference counted internally, so cloning GitHubHttp is
// cheap and every clone shares one connection pool.
#[derive(Debug, Clone)]
pub struct GitHubHttp {
    client: Client,
}

impl GitHubHttp {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(concat!("repo-showcase/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(GitHubHttp { client })
    }
}

impl HttpGet for GitHubHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response.text().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let response = |status| HttpResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(304).is_success());
        assert!(!response(403).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubHttp::new(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = GitHubHttp::new(Duration::from_secs(5)).unwrap();
        // Port 9 (discard) on localhost is essentially never listening
        let result = client.get("http://127.0.0.1:9/users/x/repos").await;
        assert!(result.is_err());
    }
}
