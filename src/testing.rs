// src/testing.rs
// =============================================================================
// Test helpers: an in-memory HttpGet and payload builders.
//
// Compiled only for `cargo test`.
// =============================================================================

use crate::error::TransportError;
use crate::github::{HttpGet, HttpResponse};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

// Scripted responses per URL
//
// Each URL holds a queue. Every call pops the front; the last entry stays put
// so a URL answers the same way forever once its script runs out.
#[derive(Default)]
pub struct FakeHttp {
    routes: Mutex<HashMap<String, VecDeque<Result<HttpResponse, TransportError>>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        let response = HttpResponse {
            status,
            status_text: status_text(status).to_string(),
            body: body.into(),
        };
        self.push(url, Ok(response))
    }

    pub fn respond_json(self, url: &str, status: u16, body: &Value) -> Self {
        self.respond(url, status, body.to_string())
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.push(url, Err(TransportError(message.to_string())))
    }

    fn push(self, url: &str, outcome: Result<HttpResponse, TransportError>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|called| called.as_str() == url).count()
    }
}

impl HttpGet for FakeHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());

        // Yield once so concurrently issued requests really interleave
        tokio::task::yield_now().await;

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Ok(HttpResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: r#"{"message":"Not Found"}"#.to_string(),
            }),
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "",
    }
}

pub const LISTING_URL: &str = "https://api.github.com/users/gajedi1/repos?sort=updated&per_page=6";

pub fn languages_url(name: &str) -> String {
    format!("https://api.github.com/repos/gajedi1/{}/languages", name)
}

// A listing entry as GitHub would send it
pub fn repo_json(name: &str, stars: u32, fork: bool, archived: bool) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("gajedi1/{}", name),
        "description": format!("About {}", name),
        "updated_at": "2024-05-01T10:00:00Z",
        "homepage": null,
        "html_url": format!("https://github.com/gajedi1/{}", name),
        "stargazers_count": stars,
        "fork": fork,
        "archived": archived,
        "languages_url": languages_url(name),
    })
}
