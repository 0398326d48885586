// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a URL, each page visited once
// - Stays on the starting page's host (links must mention it)
// - Skips links containing an ignore pattern
// - Downloads every image found along the way
//
// Submodules:
// - engine: The crawl loop and the visited set
// - resolve: Turns raw href/src values into absolute URLs
// - report: What the crawl did, for printing at the end
// =============================================================================

mod engine;
mod report;
mod resolve;

pub use engine::{CrawlRequest, Crawler};
pub use report::CrawlReport;
