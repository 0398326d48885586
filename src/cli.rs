// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every argument has a default, so running `image-crawler` with no
// arguments at all starts a crawl of the built-in seed URL.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_IGNORE, DEFAULT_SEED_URL};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "image-crawler",
    version,
    about = "Crawl a website on a single host and download every image it links",
    long_about = "image-crawler starts at a URL, follows every link that stays on the same host \
                  (visiting each page once), and saves all <img> sources it finds into a local \
                  directory."
)]
pub struct Cli {
    /// Page to start crawling from
    ///
    /// Example: image-crawler https://example.com/blog
    #[arg(default_value = DEFAULT_SEED_URL)]
    pub url: String,

    /// Links whose href contains this text are not followed
    ///
    /// This is a plain substring test on the href as written in the page
    #[arg(long, default_value = DEFAULT_IGNORE)]
    pub ignore: String,

    /// Directory downloaded images are written to (created if missing)
    #[arg(long, default_value = "images")]
    pub images_dir: PathBuf,

    /// Timeout in seconds for each HTTP request
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Stop starting new pages after this many seconds
    #[arg(long)]
    pub max_duration: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, default_value = concat!("image-crawler/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Output the crawl report in JSON format instead of a summary table
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are there no subcommands?
//    - The tool does one thing, so all arguments live on the top-level struct
//
// 2. What is Option<u64>?
//    - clap treats Option fields as optional flags with no default
//    - None means "no overall time limit"
//
// 3. What is concat!/env!?
//    - Compile-time macros: env!("CARGO_PKG_VERSION") reads the version from
//      Cargo.toml, concat! glues string literals together
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["image-crawler"]);
        assert_eq!(cli.url, DEFAULT_SEED_URL);
        assert_eq!(cli.ignore, "/search");
        assert!(!cli.json);
    }

    #[test]
    fn test_custom_ignore_and_json() {
        let cli = Cli::parse_from([
            "image-crawler",
            "https://example.com",
            "--ignore",
            "/tag/",
            "--json",
        ]);
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.ignore, "/tag/");
        assert!(cli.json);
    }
}
