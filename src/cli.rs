// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option can also come from an environment variable (the `env`
// feature), which is handy when the tool runs from a static-site build.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use repo_showcase::config::{SiteConfig, DEFAULT_API_BASE, DEFAULT_OWNER};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version,
    about = "Render a GitHub user's top repositories as portfolio project cards",
    long_about = "repo-showcase fetches a GitHub user's repositories, drops forks and archived ones, \
                  ranks the rest by stars and renders the top six as HTML project cards. \
                  If GitHub can't be reached it renders an error panel with a retry button instead."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the project grid fragment
    ///
    /// Example: repo-showcase projects --owner octocat
    Projects {
        #[command(flatten)]
        args: ShowcaseArgs,
    },

    /// Render a standalone HTML page containing the project grid
    ///
    /// Example: repo-showcase page --output index.html
    Page {
        #[command(flatten)]
        args: ShowcaseArgs,

        /// Title of the generated page
        #[arg(long, default_value = "Projects")]
        title: String,
    },
}

// Options shared by both subcommands
#[derive(Args, Debug)]
pub struct ShowcaseArgs {
    /// GitHub account whose repositories are shown
    #[arg(long, env = "SHOWCASE_OWNER", default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "SHOWCASE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// Output the result as JSON instead of HTML
    #[arg(long)]
    pub json: bool,

    /// Write the output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// On failure, offer to try again from the terminal
    #[arg(long)]
    pub interactive: bool,

    /// HTTP timeout per request, in seconds
    #[arg(long, env = "SHOWCASE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ShowcaseArgs {
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig::new(self.owner.clone(), self.api_base.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["repo-showcase", "projects"]).unwrap();
        let Commands::Projects { args } = cli.command else {
            panic!("expected projects subcommand");
        };

        assert_eq!(args.api_base.as_str(), "https://api.github.com/");
        assert!(!args.json);
        assert_eq!(args.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_page_flags() {
        let cli = Cli::try_parse_from([
            "repo-showcase",
            "page",
            "--owner",
            "octocat",
            "--title",
            "Octo",
            "-o",
            "out.html",
        ])
        .unwrap();

        let Commands::Page { args, title } = cli.command else {
            panic!("expected page subcommand");
        };
        assert_eq!(args.owner, "octocat");
        assert_eq!(title, "Octo");
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.site_config().profile_url(), "https://github.com/octocat?tab=repositories");
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let result = Cli::try_parse_from(["repo-showcase", "projects", "--api-base", "not a url"]);
        assert!(result.is_err());
    }
}
