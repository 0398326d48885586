// src/page/mod.rs
// =============================================================================
// Everything needed to turn a URL into something the crawler can use.
//
// Submodules:
// - fetch: Makes HTTP requests for pages and images
// - html: Extracts anchor hrefs and image sources from HTML
// =============================================================================

mod fetch;
mod html;

pub use fetch::Fetcher;
pub use html::extract_page_refs;
