// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself, depth-first.
//
// How it works:
// 1. Start with the seed URL on a stack
// 2. Pop a URL; skip it if we've seen it, otherwise mark it seen
// 3. Fetch the page HTML
// 4. Download every <img> on the page, one at a time
// 5. Push the page's same-host links onto the stack (in reverse, so the
//    first link in the document is popped first)
// 6. Repeat until the stack is empty
//
// Because the seen-check happens when a URL is popped, this visits pages in
// exactly the order a recursive crawl would: a link's whole subtree is done
// before its next sibling starts, and a page's images are done before any
// of its links are followed. Using a stack instead of recursion means a very
// deep site can't blow the call stack.
//
// Failures never stop the crawl. A page that can't be fetched is a dead end,
// an image that can't be saved is skipped, and both end up in the report.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - Vec as a stack: push() and pop() both work on the end
// =============================================================================

use std::collections::HashSet;
use tokio::time::Instant;
use tracing::{error, info, warn};

use super::report::{CrawlReport, DownloadedImage};
use super::resolve::PageOrigin;
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::images::{sanitize_filename, ImageStore};
use crate::page::{extract_page_refs, Fetcher};

/// One unit of work: a page to visit and the ignore pattern to apply to its
/// links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    pub ignore: String,
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>, ignore: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ignore: ignore.into(),
        }
    }
}

/// URLs already submitted for fetching during this crawl.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Marks `url` as visited. Returns false if it already was.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

// A link is followed when its raw href mentions the current page's host and
// does not mention the ignore pattern. Both are plain substring tests on the
// href as written, before it is resolved.
fn should_follow(link: &str, host: &str, ignore: &str) -> bool {
    link.contains(host) && !link.contains(ignore)
}

/// Owns everything one crawl needs: the visited set, the HTTP client and
/// the image output directory.
#[derive(Debug)]
pub struct Crawler {
    config: CrawlConfig,
    fetcher: Fetcher,
    images: ImageStore,
    visited: VisitedSet,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        let images = ImageStore::new(config.images_dir.clone());

        Ok(Self {
            config,
            fetcher,
            images,
            visited: VisitedSet::default(),
        })
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    // Crawls every same-host page reachable from `request.url`
    //
    // Never fails: every error is logged, recorded in the report, and
    // treated as a dead end for that page or image only.
    pub async fn crawl(&mut self, request: CrawlRequest) -> CrawlReport {
        let started = Instant::now();
        let mut report = CrawlReport::default();
        let mut stack = vec![request];

        while let Some(request) = stack.pop() {
            if self.visited.contains(&request.url) {
                continue;
            }

            if let Some(limit) = self.config.max_duration {
                if started.elapsed() >= limit {
                    warn!(
                        pending = stack.len() + 1,
                        "crawl time limit of {:?} reached, stopping", limit
                    );
                    report.timed_out = true;
                    break;
                }
            }

            info!("Crawling: {}", request.url);
            self.visited.insert(&request.url);
            report.pages.push(request.url.clone());

            match self.crawl_page(&request, &mut report).await {
                Ok(children) => stack.extend(children.into_iter().rev()),
                Err(e) => {
                    error!(kind = ?e.kind(), "{}", e);
                    report.record_failure(&e);
                }
            }
        }

        report
    }

    // Processes one page: fetch, download its images, and return the links
    // to visit next in document order
    async fn crawl_page(
        &mut self,
        request: &CrawlRequest,
        report: &mut CrawlReport,
    ) -> Result<Vec<CrawlRequest>, CrawlError> {
        let origin = PageOrigin::parse(&request.url)?;
        let html = self.fetcher.fetch_page(&request.url).await?;
        let refs = extract_page_refs(&html);

        for src in &refs.images {
            let image_url = origin.resolve(src);
            match self.download_image(&image_url).await {
                Ok(image) => {
                    info!("Downloaded image: {}", image.filename);
                    report.images.push(image);
                }
                Err(e) => {
                    error!(kind = ?e.kind(), page = %request.url, "{}", e);
                    report.record_failure(&e);
                }
            }
        }

        let children = refs
            .links
            .iter()
            .filter(|link| should_follow(link, &origin.host, &request.ignore))
            .map(|link| CrawlRequest::new(origin.resolve(link), request.ignore.clone()))
            .collect();

        Ok(children)
    }

    async fn download_image(&mut self, image_url: &str) -> Result<DownloadedImage, CrawlError> {
        let response = self.fetcher.fetch_image(image_url).await?;
        let filename = sanitize_filename(image_url);
        let bytes = self.images.save(image_url, &filename, response).await?;

        Ok(DownloadedImage {
            url: image_url.to_string(),
            filename,
            bytes,
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack (Vec) and not a queue (VecDeque)?
//    - A queue gives breadth-first order: all links of a page, then their links
//    - A stack gives depth-first order: follow one link all the way down first
//    - We want depth-first, the same order plain recursion would give
//
// 2. Why push children in reverse?
//    - pop() takes from the end
//    - If links are [B, C], pushing C then B means B comes out first
//
// 3. Why check "visited" on pop instead of on push?
//    - A page can be pushed several times before it's visited (two pages
//      linking to it). Checking on pop makes sure it's fetched exactly once,
//      at the moment recursion would have reached it.
//
// 4. What does `?` do inside crawl_page?
//    - If the expression is Err, return that error immediately
//    - crawl() catches it and logs it, so it never goes further up
// -----------------------------------------------------------------------------
