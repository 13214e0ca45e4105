// src/config.rs
use crate::api::PostQuery;
use crate::constants::{API_PATH, DEFAULT_POSTS_PER_PAGE, DEFAULT_SITE_URL, SITE_URL_ENV};
use clap::{Parser, Subcommand};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// WordPress site URL (overrides the WP_URL environment variable)
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print raw JSON instead of a human-readable listing
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The client operation to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List posts, newest first
    Posts {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Posts per page
        #[arg(long, default_value_t = DEFAULT_POSTS_PER_PAGE)]
        per_page: u32,

        /// Restrict to these category ids (repeatable)
        #[arg(short = 'c', long = "category")]
        categories: Vec<u64>,
    },
    /// Show a single post by slug
    Post { slug: String },
    /// List every post slug on the site
    Slugs,
    /// List non-empty categories
    Categories,
}

impl Command {
    /// Builds the listing query for a `posts` invocation.
    pub fn post_query(&self) -> Option<PostQuery> {
        match self {
            Command::Posts {
                page,
                per_page,
                categories,
            } => Some(
                PostQuery::default()
                    .with_page(*page)
                    .with_per_page(*per_page)
                    .with_categories(categories.clone()),
            ),
            _ => None,
        }
    }
}

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub site_url: String,
}

impl ClientConfig {
    /// Reads the site URL from `WP_URL`, falling back to the placeholder site.
    pub fn from_env() -> Self {
        Self::with_site_url(std::env::var(SITE_URL_ENV).ok())
    }

    /// Uses the given site URL; `None` or an empty string selects the placeholder.
    ///
    /// The value is not validated. A bad URL surfaces later as a failed
    /// request, which the client turns into an empty result.
    pub fn with_site_url(site_url: Option<String>) -> Self {
        let site_url = site_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        Self { site_url }
    }

    /// The REST namespace root, e.g. `https://example.com/wp-json/wp/v2`.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), API_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_site_url(None)
    }
}

/// Resolved run configuration for the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub client: ClientConfig,
    pub command: Command,
    pub json: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves the run configuration from CLI input and environment.
    ///
    /// The `--site` flag wins over `WP_URL`.
    pub fn resolve(cli: CommandLineInput) -> Self {
        let client = match cli.site {
            Some(site) => ClientConfig::with_site_url(Some(site)),
            None => ClientConfig::from_env(),
        };

        Self {
            client,
            command: cli.command,
            json: cli.json,
            verbose: cli.verbose,
        }
    }
}
