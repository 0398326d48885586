// src/page/fetch.rs
// =============================================================================
// This module makes the HTTP requests for pages and images.
//
// Key functionality:
// - One shared reqwest Client for the whole crawl (connection pooling)
// - Pages are read fully as text
// - Images are handed back as a live response so the body can be streamed
//   to disk
// - Network failures are turned into a short human-readable reason
//   (timeout, DNS, SSL, ...)
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: Every request returns either the data or a CrawlError
// =============================================================================

use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::CrawlConfig;
use crate::error::CrawlError;

/// Thin wrapper around a reqwest client configured for crawling.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(5).min(config.request_timeout))
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    // Fetches a web page and returns its HTML content
    //
    // Fails with FetchFailure when the request errors out, the status is
    // not 2xx, or the body cannot be read as text.
    pub async fn fetch_page(&self, url: &str) -> Result<String, CrawlError> {
        let fetch_failure = |reason: String| CrawlError::FetchFailure {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_failure(categorize_error(&e)))?;

        if !response.status().is_success() {
            return Err(fetch_failure(describe_status(&response)));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_failure(categorize_error(&e)))
    }

    // Starts an image download and returns the response once headers arrive
    //
    // The body is not read here; ImageStore streams it to disk.
    pub async fn fetch_image(&self, url: &str) -> Result<Response, CrawlError> {
        let image_failure = |reason: String| CrawlError::ImageFetchFailure {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| image_failure(categorize_error(&e)))?;

        if !response.status().is_success() {
            return Err(image_failure(describe_status(&response)));
        }

        Ok(response)
    }
}

// "HTTP 404 Not Found" style description of a response status
fn describe_status(response: &Response) -> String {
    let status = response.status();
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - A malformed URL (reqwest refuses to build the request)
fn categorize_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_builder() {
        format!("Invalid request: {}", error_string)
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            "Connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}
