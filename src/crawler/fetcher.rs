//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch page content
//! - Error classification into `PageError`

use crate::config::UserAgentConfig;
use crate::PageError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Source of page content for the crawl engine
///
/// Any failure is reported as a `PageError`; the engine treats every fetch
/// failure the same way.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the content of `address` as text
    async fn fetch(&self, address: &str) -> Result<String, PageError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Whole-request timeout; the connect timeout is a third of it
///
/// # Example
///
/// ```no_run
/// use site_indexer::config::UserAgentConfig;
/// use site_indexer::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(timeout)
        .connect_timeout((timeout / 3).max(Duration::from_secs(1)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Format: CrawlerName/Version (+ContactURL; ContactEmail)
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Fetcher backed by a reqwest `Client`
///
/// Redirects are followed by the client; the content is returned for any
/// 2xx response regardless of Content-Type.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with a client configured from the user agent settings
    pub fn from_config(
        config: &UserAgentConfig,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config, timeout)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<String, PageError> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| classify_error(address, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status {
                url: address.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_error(address, e))
    }
}

/// Maps a reqwest error onto the page error taxonomy
fn classify_error(address: &str, e: reqwest::Error) -> PageError {
    if e.is_timeout() {
        PageError::Timeout {
            url: address.to_string(),
        }
    } else if e.is_connect() {
        PageError::Fetch {
            url: address.to_string(),
            message: "Connection refused".to_string(),
        }
    } else {
        PageError::Fetch {
            url: address.to_string(),
            message: e.to_string(),
        }
    }
}
