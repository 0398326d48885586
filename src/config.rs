// src/config.rs
// =============================================================================
// Runtime settings for one crawl.
//
// Built from the command line in main.rs (see cli.rs), or straight from
// Default in tests.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Seed URL used when none is given on the command line
pub const DEFAULT_SEED_URL: &str = "https://x.com/arpit_bhayani";

/// Links containing this are not followed unless overridden
pub const DEFAULT_IGNORE: &str = "/search";

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Directory images are written into
    pub images_dir: PathBuf,

    /// Timeout for each individual HTTP request
    pub request_timeout: Duration,

    /// Stop starting new pages once the crawl has run this long
    pub max_duration: Option<Duration>,

    /// User agent to use for requests
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            request_timeout: Duration::from_secs(10),
            max_duration: None,
            user_agent: format!("image-crawler/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&Cli> for CrawlConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            images_dir: cli.images_dir.clone(),
            request_timeout: Duration::from_secs(cli.timeout),
            max_duration: cli.max_duration.map(Duration::from_secs),
            user_agent: cli.user_agent.clone(),
        }
    }
}
