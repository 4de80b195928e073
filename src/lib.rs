//! Site-Indexer: a single-site crawler with keyword search
//!
//! This crate crawls every page reachable from a seed address without leaving
//! the seed's address prefix, keeps the extracted text of each page in an
//! in-memory index, and answers case-insensitive keyword queries over it.

pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Indexer operations
#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Failure while processing a single page
///
/// These never escape a crawl; the engine records them against the address
/// that produced them and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Request failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

impl PageError {
    /// Returns true for transport-level failures (anything but a parse error)
    pub fn is_fetch(&self) -> bool {
        !matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for Site-Indexer operations
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, CrawlLimits};
pub use index::Index;
pub use state::PageState;
pub use crate::url::{in_scope, resolve};
