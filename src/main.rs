// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the projects section: Ready -> (Displayed | Errored)
// 3. In --interactive mode, let the user hit "retry" from the terminal
// 4. Write HTML (fragment or page) or JSON to stdout / a file
// 5. Exit with proper code (0 = projects shown, 1 = error panel, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ShowcaseArgs};
use repo_showcase::github::{GitHubHttp, HttpGet};
use repo_showcase::projects::EnrichedRepository;
use repo_showcase::render::page_document;
use repo_showcase::{FlowState, ProjectsSection, SectionEvent};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries nothing but the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repo_showcase=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Projects { args } => handle_showcase(&args, None).await,
        Commands::Page { args, title } => handle_showcase(&args, Some(&title)).await,
    }
}

// Runs one projects section to completion and writes the result
//
// Parameters:
//   args: shared CLI options
//   page_title: Some(title) to wrap the grid in a full HTML page
async fn handle_showcase(args: &ShowcaseArgs, page_title: Option<&str>) -> Result<i32> {
    let http = GitHubHttp::new(args.timeout()).context("Failed to create HTTP client")?;
    let mut section = ProjectsSection::new(http, args.site_config());

    section.handle(SectionEvent::Ready).await;

    if args.interactive {
        // One reader for the whole session so typed-ahead answers survive
        let mut answers = BufReader::new(tokio::io::stdin()).lines();
        retry_until_settled(&mut section, &mut answers).await?;
    }

    let output = if args.json {
        serde_json::to_string_pretty(&Report::from_state(section.state()))?
    } else {
        match page_title {
            Some(title) => page_document(title, &section.config().owner, section.container()),
            None => section.container().html().to_string(),
        }
    };

    write_output(args, &output)?;

    match section.state() {
        FlowState::Displayed { .. } => Ok(0),
        _ => Ok(1),
    }
}

// The error panel's "Try Again" button, terminal edition
//
// Keeps retrying while the section is errored and the user answers with
// anything but "q". Stops at the first success, a "q", or end of input.
async fn retry_until_settled<C, R>(
    section: &mut ProjectsSection<C>,
    answers: &mut Lines<R>,
) -> Result<()>
where
    C: HttpGet,
    R: AsyncBufRead + Unpin,
{
    while matches!(section.state(), FlowState::Errored { .. }) {
        if !prompt_retry(answers).await? {
            break;
        }
        section.handle(SectionEvent::Retry).await;
    }
    Ok(())
}

// Returns: true when the user wants another attempt
async fn prompt_retry<R: AsyncBufRead + Unpin>(answers: &mut Lines<R>) -> Result<bool> {
    eprint!("Loading projects failed. Press Enter to try again, or type q to quit: ");

    let answer = answers.next_line().await?;

    // EOF (stdin closed) counts as quitting
    Ok(matches!(answer, Some(line) if !line.trim().eq_ignore_ascii_case("q")))
}

fn write_output(args: &ShowcaseArgs, output: &str) -> Result<()> {
    match &args.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", output);
            Ok(())
        }
    }
}

// The --json shape of a finished section
#[derive(Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum Report<'a> {
    Displayed {
        projects: &'a [EnrichedRepository],
    },
    Errored {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'a str>,
    },
    Pending,
}

impl<'a> Report<'a> {
    fn from_state(state: &'a FlowState) -> Self {
        match state {
            FlowState::Displayed { projects } => Report::Displayed { projects },
            FlowState::Errored { failure } => Report::Errored {
                error: failure.to_string(),
                status: failure.status(),
                message: failure.server_message(),
            },
            FlowState::Idle | FlowState::Loading => Report::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_showcase::github::HttpResponse;
    use repo_showcase::{FetchFailure, SiteConfig, TransportError};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Every request fails; counts how many were made
    #[derive(Default)]
    struct OfflineHttp {
        requests: AtomicUsize,
    }

    impl HttpGet for OfflineHttp {
        async fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Err(TransportError("connection refused".to_string()))
        }
    }

    async fn errored_section() -> ProjectsSection<OfflineHttp> {
        let mut section = ProjectsSection::new(OfflineHttp::default(), SiteConfig::default());
        section.handle(SectionEvent::Ready).await;
        section
    }

    #[tokio::test]
    async fn test_every_queued_answer_is_used() {
        let mut section = errored_section().await;
        let mut answers = BufReader::new(&b"\n\nq\n"[..]).lines();

        retry_until_settled(&mut section, &mut answers).await.unwrap();

        // Ready plus two retries; the "q" stops the loop
        assert_eq!(section.http().requests.load(Ordering::SeqCst), 3);
        assert_eq!(section.state().name(), "errored");
    }

    #[tokio::test]
    async fn test_end_of_input_stops_retrying() {
        let mut section = errored_section().await;
        let mut answers = BufReader::new(&b"\n"[..]).lines();

        retry_until_settled(&mut section, &mut answers).await.unwrap();

        assert_eq!(section.http().requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_quit_answer_is_case_insensitive() {
        let mut section = errored_section().await;
        let mut answers = BufReader::new(&b" Q \n\n"[..]).lines();

        retry_until_settled(&mut section, &mut answers).await.unwrap();

        assert_eq!(section.http().requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_error_report_json() {
        let state = FlowState::Errored {
            failure: FetchFailure::Http {
                status: 403,
                status_text: "Forbidden".to_string(),
                message: Some("API rate limit exceeded".to_string()),
            },
        };

        let value: Value = serde_json::to_value(Report::from_state(&state)).unwrap();
        assert_eq!(
            value,
            json!({
                "state": "errored",
                "error": "GitHub API error: 403 Forbidden",
                "status": 403,
                "message": "API rate limit exceeded",
            })
        );
    }

    #[test]
    fn test_empty_failure_report_has_no_status() {
        let state = FlowState::Errored { failure: FetchFailure::Empty };
        let value: Value = serde_json::to_value(Report::from_state(&state)).unwrap();
        assert_eq!(value, json!({ "state": "errored", "error": "No repositories found" }));
    }

    #[test]
    fn test_displayed_report_json() {
        let state = FlowState::Displayed { projects: Vec::new() };
        let value: Value = serde_json::to_value(Report::from_state(&state)).unwrap();
        assert_eq!(value, json!({ "state": "displayed", "projects": [] }));
    }
}
