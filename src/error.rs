// src/error.rs
// =============================================================================
// Error types for everything that can go wrong while crawling.
//
// Every failure is local to one unit of work:
// - a page that could not be fetched ends that branch of the crawl
// - an image that could not be fetched or written is skipped
// - anything else that breaks a single page (like an unparseable URL)
//   abandons that page only
//
// Nothing here ever stops the whole run. The crawler logs the error,
// records it in the report and moves on.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Enums with data: each variant carries the URL and a reason
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// A failure while crawling a single page or image.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The page request failed or returned a non-success status
    #[error("Failed to fetch {url}: {reason}")]
    FetchFailure { url: String, reason: String },

    /// An image request failed or returned a non-success status
    #[error("Failed to fetch image {url}: {reason}")]
    ImageFetchFailure { url: String, reason: String },

    /// The image body could not be streamed to disk
    #[error("Error downloading image {url}: {reason}")]
    ImageWriteFailure { url: String, reason: String },

    /// Any other problem that made one page impossible to process
    #[error("Error crawling {url}: {reason}")]
    BranchCrawlError { url: String, reason: String },
}

/// The kind of a [`CrawlError`], without its payload.
///
/// Used in the crawl report so failures can be grouped and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Fetch,
    ImageFetch,
    ImageWrite,
    Branch,
}

impl CrawlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrawlError::FetchFailure { .. } => ErrorKind::Fetch,
            CrawlError::ImageFetchFailure { .. } => ErrorKind::ImageFetch,
            CrawlError::ImageWriteFailure { .. } => ErrorKind::ImageWrite,
            CrawlError::BranchCrawlError { .. } => ErrorKind::Branch,
        }
    }

    /// The URL of the page or image that failed
    pub fn url(&self) -> &str {
        match self {
            CrawlError::FetchFailure { url, .. }
            | CrawlError::ImageFetchFailure { url, .. }
            | CrawlError::ImageWriteFailure { url, .. }
            | CrawlError::BranchCrawlError { url, .. } => url,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            CrawlError::FetchFailure { reason, .. }
            | CrawlError::ImageFetchFailure { reason, .. }
            | CrawlError::ImageWriteFailure { reason, .. }
            | CrawlError::BranchCrawlError { reason, .. } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_url_and_reason() {
        let err = CrawlError::FetchFailure {
            url: "https://example.com/a".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com/a: HTTP 404 Not Found"
        );
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert_eq!(err.url(), "https://example.com/a");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ImageWrite).unwrap();
        assert_eq!(json, "\"image_write\"");
    }
}
