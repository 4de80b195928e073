//! Crawl engine - traversal of a single site
//!
//! The engine owns everything a crawl mutates: the visited set, the index
//! and the run statistics. It walks the site depth-first with an explicit
//! frontier stack:
//! - An address is marked visited before it is fetched
//! - A page's text is indexed before any of its links are followed
//! - Links are resolved against the crawl's base address and only followed
//!   if they stay under it
//! - A failing page is logged and recorded, never returned to the caller

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{ExtractedPage, Extractor, HtmlExtractor};
use crate::index::Index;
use crate::output::CrawlStats;
use crate::state::{PageState, VisitedSet};
use crate::url::{in_scope, resolve};
use crate::PageError;
use std::collections::HashSet;
use std::time::Instant;

/// Optional bounds on a crawl; `None` means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlLimits {
    /// Maximum number of link hops from the seed; the seed itself is depth 0
    pub max_depth: Option<u32>,

    /// Maximum number of addresses fetched over the crawler's lifetime
    pub max_pages: Option<usize>,
}

/// An address waiting on the frontier
#[derive(Debug)]
struct FrontierEntry {
    address: String,
    depth: u32,
}

/// Single-site crawler with an in-memory text index
///
/// # Example
///
/// ```no_run
/// use site_indexer::crawler::{Crawler, HtmlExtractor, HttpFetcher};
/// use site_indexer::config::UserAgentConfig;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::from_config(&UserAgentConfig::default(), Duration::from_secs(30))?;
/// let mut crawler = Crawler::new(fetcher, HtmlExtractor);
/// crawler.crawl("https://example.com", None).await;
/// for address in crawler.search("test") {
///     println!("{}", address);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F, E = HtmlExtractor> {
    fetcher: F,
    extractor: E,
    limits: CrawlLimits,
    visited: VisitedSet,
    index: Index,
    stats: CrawlStats,
}

impl<F: Fetcher, E: Extractor> Crawler<F, E> {
    /// Creates a crawler with an empty visited set and index
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            limits: CrawlLimits::default(),
            visited: VisitedSet::new(),
            index: Index::new(),
            stats: CrawlStats::default(),
        }
    }

    pub fn with_limits(mut self, limits: CrawlLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Crawls everything reachable from `address` that stays under `base`
    ///
    /// `base` is the scope boundary; when `None` it is `address` itself. The
    /// same boundary is used for every page reached from here. Calling this
    /// for an address that was already visited does nothing.
    ///
    /// Page failures are logged and recorded in the visited set; they never
    /// abort the crawl and are never returned.
    pub async fn crawl(&mut self, address: &str, base: Option<&str>) {
        if self.visited.contains(address) {
            tracing::debug!("Already visited {}, skipping", address);
            return;
        }

        let base = base.unwrap_or(address).to_string();
        let start_time = Instant::now();
        let visited_before = self.visited.len();

        tracing::info!("Starting crawl at {} (scope: {})", address, base);

        let mut frontier = vec![FrontierEntry {
            address: address.to_string(),
            depth: 0,
        }];

        while let Some(entry) = frontier.pop() {
            if self.visited.contains(&entry.address) {
                continue;
            }

            if self.page_limit_reached() {
                let dropped = self.unvisited_count(&entry, &frontier);
                tracing::info!(
                    "Page limit reached, leaving {} addresses unvisited",
                    dropped
                );
                self.stats.frontier_dropped += dropped as u64;
                break;
            }

            self.visited.mark(&entry.address);
            self.stats.pages_visited += 1;
            tracing::debug!("Processing [depth {}]: {}", entry.depth, entry.address);

            let links = self.process_url(&entry.address).await;
            let next = self.follow_links(&links, &base, entry.depth);

            // Reversed so the first link on the page is popped first
            frontier.extend(next.into_iter().rev());

            let crawled = self.visited.len() - visited_before;
            if crawled % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier",
                    crawled,
                    frontier.len()
                );
            }
        }

        self.stats.elapsed += start_time.elapsed();

        tracing::info!(
            "Crawl completed: {} pages visited, {} indexed in {:?}",
            self.visited.len() - visited_before,
            self.index.len(),
            start_time.elapsed()
        );
    }

    /// Fetches and indexes one address, returning its raw links
    ///
    /// A failed address yields no links.
    async fn process_url(&mut self, address: &str) -> Vec<String> {
        match self.fetch_and_extract(address).await {
            Ok(page) => {
                self.index.insert(address, page.text);
                self.visited.set_state(address, PageState::Indexed);
                self.stats.pages_indexed += 1;
                page.links
            }
            Err(e) => {
                tracing::warn!("Error crawling {}: {}", address, e);
                let state = if e.is_fetch() {
                    self.stats.fetch_failures += 1;
                    PageState::FetchFailed
                } else {
                    self.stats.parse_failures += 1;
                    PageState::ParseFailed
                };
                self.visited.set_state(address, state);
                Vec::new()
            }
        }
    }

    async fn fetch_and_extract(&self, address: &str) -> Result<ExtractedPage, PageError> {
        let content = self.fetcher.fetch(address).await?;

        self.extractor
            .extract(&content)
            .map_err(|message| PageError::Parse {
                url: address.to_string(),
                message,
            })
    }

    /// Resolves raw links and keeps the ones that should be crawled next
    fn follow_links(&mut self, links: &[String], base: &str, depth: u32) -> Vec<FrontierEntry> {
        let mut next = Vec::new();

        for raw in links {
            self.stats.links_seen += 1;

            let resolved = resolve(raw, base);
            if !in_scope(&resolved, base) {
                tracing::debug!("Out of scope: {}", resolved);
                self.stats.links_out_of_scope += 1;
                continue;
            }

            if self.limits.max_depth.is_some_and(|max| depth >= max) {
                tracing::debug!("Beyond max depth: {}", resolved);
                self.stats.links_beyond_depth += 1;
                continue;
            }

            next.push(FrontierEntry {
                address: resolved,
                depth: depth + 1,
            });
        }

        next
    }

    /// Counts distinct addresses among `entry` and the frontier that were never visited
    fn unvisited_count(&self, entry: &FrontierEntry, frontier: &[FrontierEntry]) -> usize {
        std::iter::once(entry)
            .chain(frontier)
            .map(|pending| pending.address.as_str())
            .filter(|address| !self.visited.contains(address))
            .collect::<HashSet<_>>()
            .len()
    }

    fn page_limit_reached(&self) -> bool {
        self.limits
            .max_pages
            .is_some_and(|max| self.visited.len() >= max)
    }
}

impl<F, E> Crawler<F, E> {
    /// Finds indexed addresses whose text contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.index.search(keyword)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }
}
