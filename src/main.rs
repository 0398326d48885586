// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Crawl from the seed URL, downloading images along the way
// 4. Print what happened (summary table or JSON)
// 5. Exit with proper code (0 = crawl finished, 2 = could not start)
//
// A crawl that hit broken pages or images still exits with 0. Those
// failures are logged as they happen and listed in the report.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - runtime settings
mod crawl; // src/crawl/ - the crawl loop
mod error; // src/error.rs - crawl error types
mod images; // src/images/ - image naming and storage
mod logging; // src/logging.rs - tracing setup
mod page; // src/page/ - HTTP fetching and HTML extraction

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::CrawlConfig;
use crawl::{CrawlReport, CrawlRequest, Crawler};
use error::ErrorKind;
use tracing::warn;

use anyhow::Result;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Something went wrong before the crawl could start
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::setup_logging()?;

    if cli.ignore.is_empty() {
        warn!("--ignore is empty: every link contains it, so no links will be followed");
    }

    let config = CrawlConfig::from(&cli);
    let images_dir = config.images_dir.clone();
    let mut crawler = Crawler::new(config)?;

    let report = crawler
        .crawl(CrawlRequest::new(cli.url.clone(), cli.ignore.clone()))
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, crawler.visited().len(), &images_dir.display().to_string());
    }

    Ok(0)
}

// Prints the report as a human-readable summary
fn print_summary(report: &CrawlReport, visited: usize, images_dir: &str) {
    if !report.failures.is_empty() {
        println!("{:<60} {:<12} {:<30}", "URL", "KIND", "REASON");
        println!("{}", "=".repeat(102));

        for failure in &report.failures {
            // Truncate URL if too long for display
            let url_display = if failure.url.chars().count() > 57 {
                format!("{}...", failure.url.chars().take(57).collect::<String>())
            } else {
                failure.url.clone()
            };
            println!(
                "{:<60} {:<12} {:<30}",
                url_display,
                format_kind(failure.kind),
                failure.reason
            );
        }
        println!();
    }

    println!("📊 Summary:");
    println!("   📄 Pages visited: {}", visited);
    println!("   🖼️  Images saved to {}: {}", images_dir, report.images.len());
    println!("   ❌ Pages failed: {}", report.failures_of(ErrorKind::Fetch));
    println!(
        "   ⚠️  Images failed: {}",
        report.failures_of(ErrorKind::ImageFetch) + report.failures_of(ErrorKind::ImageWrite)
    );
    println!("   💥 Other errors: {}", report.failures_of(ErrorKind::Branch));
    if report.timed_out {
        println!("   ⏱️  Stopped early: time limit reached");
    }
}

fn format_kind(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Fetch => "PAGE",
        ErrorKind::ImageFetch => "IMAGE",
        ErrorKind::ImageWrite => "WRITE",
        ErrorKind::Branch => "ERROR",
    }
}
