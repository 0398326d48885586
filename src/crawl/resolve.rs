// src/crawl/resolve.rs
// =============================================================================
// Turns the raw href/src strings found in a page into absolute URLs.
//
// The rules are deliberately simple string rules, not browser-style
// resolution:
// 1. Anything starting with "http" is already absolute
// 2. Anything starting with "/" is glued onto scheme://host
// 3. Anything else is glued onto scheme://host/
//
// So "../img.png" on https://a.com/blog/post becomes
// "https://a.com/../img.png". That is expected.
// =============================================================================

use url::Url;

use crate::error::CrawlError;

/// Host and scheme of the page currently being crawled.
///
/// `host` keeps an explicit port ("127.0.0.1:8080") and `scheme` keeps
/// its trailing colon ("https:").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    pub host: String,
    pub scheme: String,
}

impl PageOrigin {
    /// Extracts host and scheme from an absolute page URL
    pub fn parse(page_url: &str) -> Result<Self, CrawlError> {
        let parsed = Url::parse(page_url).map_err(|e| CrawlError::BranchCrawlError {
            url: page_url.to_string(),
            reason: format!("invalid URL: {}", e),
        })?;

        let host = parsed.host_str().ok_or_else(|| CrawlError::BranchCrawlError {
            url: page_url.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        // Url::parse drops a default port ("https://a.com:443"), but a port
        // written in the URL stays part of the host
        let port = if has_explicit_port(page_url) {
            parsed.port_or_known_default()
        } else {
            None
        };
        let host = match port {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            host,
            scheme: format!("{}:", parsed.scheme()),
        })
    }

    /// Resolves `link` against this origin, see [`get_url`]
    pub fn resolve(&self, link: &str) -> String {
        get_url(link, &self.host, &self.scheme)
    }
}

// True when the URL's authority ends in ":<digits>"
fn has_explicit_port(page_url: &str) -> bool {
    let Some((_, rest)) = page_url.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();

    match host_port.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

// Resolves a raw link to an absolute URL
//
// Parameters:
//   link: raw href or src value (callers skip empty values)
//   host: host of the page the link was found on
//   scheme: scheme of that page, with its trailing colon
//
// Examples:
//   get_url("http://other.com/x", "a.com", "https:") -> "http://other.com/x"
//   get_url("/path", "a.com", "https:")              -> "https://a.com/path"
//   get_url("path", "a.com", "https:")               -> "https://a.com/path"
pub fn get_url(link: &str, host: &str, scheme: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{}//{}{}", scheme, host, link)
    } else {
        format!("{}//{}/{}", scheme, host, link)
    }
}
