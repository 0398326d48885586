// src/crawl/report.rs
// =============================================================================
// What a crawl did: pages visited, images saved, and everything that failed.
//
// The report is filled in as the crawl goes and printed by main.rs, either
// as a short summary or as JSON (--json).
// =============================================================================

use serde::Serialize;

use crate::error::{CrawlError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadedImage {
    pub url: String,
    pub filename: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlFailure {
    pub url: String,
    pub kind: ErrorKind,
    pub reason: String,
}

impl From<&CrawlError> for CrawlFailure {
    fn from(err: &CrawlError) -> Self {
        Self {
            url: err.url().to_string(),
            kind: err.kind(),
            reason: err.reason().to_string(),
        }
    }
}

/// Summary of one crawl run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CrawlReport {
    /// Every URL submitted for fetching, in visit order
    pub pages: Vec<String>,
    /// Images written to disk, in download order
    pub images: Vec<DownloadedImage>,
    pub failures: Vec<CrawlFailure>,
    /// True when --max-duration stopped the crawl early
    pub timed_out: bool,
}

impl CrawlReport {
    pub fn record_failure(&mut self, err: &CrawlError) {
        self.failures.push(CrawlFailure::from(err));
    }

    /// Number of failures of the given kind
    pub fn failures_of(&self, kind: ErrorKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count_failures() {
        let mut report = CrawlReport::default();
        report.record_failure(&CrawlError::FetchFailure {
            url: "https://a.com/x".to_string(),
            reason: "HTTP 500 Internal Server Error".to_string(),
        });
        report.record_failure(&CrawlError::ImageFetchFailure {
            url: "https://a.com/x.png".to_string(),
            reason: "Request timed out".to_string(),
        });

        assert_eq!(report.failures_of(ErrorKind::Fetch), 1);
        assert_eq!(report.failures_of(ErrorKind::ImageFetch), 1);
        assert_eq!(report.failures_of(ErrorKind::Branch), 0);
        assert_eq!(report.failures[1].url, "https://a.com/x.png");
    }

    #[test]
    fn test_serializes_to_json() {
        let report = CrawlReport {
            pages: vec!["https://a.com/".to_string()],
            images: vec![DownloadedImage {
                url: "https://a.com/logo.png".to_string(),
                filename: "logo.png".to_string(),
                bytes: 42,
            }],
            failures: Vec::new(),
            timed_out: false,
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pages"][0], "https://a.com/");
        assert_eq!(json["images"][0]["filename"], "logo.png");
        assert_eq!(json["timed_out"], false);
    }
}
