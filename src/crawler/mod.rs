//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML text and link extraction behind the `Extractor` trait
//! - The crawl engine that ties them to the visited set and index

mod engine;
mod fetcher;
mod parser;

pub use engine::{CrawlLimits, Crawler};
pub use fetcher::{build_http_client, user_agent_string, Fetcher, HttpFetcher};
pub use parser::{parse_html, ExtractedPage, Extractor, HtmlExtractor};

use crate::config::{validate, Config};
use std::time::Duration;

/// Runs a complete crawl of the configured seed
///
/// This is the main entry point for a crawl over HTTP. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client from the user agent settings
/// 3. Crawl from the seed, using the seed as the scope boundary
/// 4. Hand back the crawler, ready to be searched
///
/// Page-level failures never surface here; only an invalid configuration or
/// a client that cannot be built is an error.
///
/// # Example
///
/// ```no_run
/// use site_indexer::config::Config;
/// use site_indexer::crawler::crawl_site;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let crawler = crawl_site(&Config::default()).await?;
/// println!("{} pages indexed", crawler.index().len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site(config: &Config) -> crate::Result<Crawler<HttpFetcher>> {
    validate(config)?;

    let fetcher = HttpFetcher::from_config(
        &config.user_agent,
        Duration::from_secs(config.crawler.request_timeout),
    )?;

    let limits = CrawlLimits {
        max_depth: config.crawler.max_depth,
        max_pages: config.crawler.max_pages,
    };

    let mut crawler = Crawler::new(fetcher, HtmlExtractor).with_limits(limits);
    crawler.crawl(&config.crawler.seed, None).await;

    Ok(crawler)
}
