//! Output module for presenting crawl and search results
//!
//! This module handles:
//! - Rendering search results for the user
//! - Recording and printing crawl statistics

mod report;
pub mod stats;

pub use report::{print_results, write_results, NO_RESULTS, RESULTS_HEADER};
pub use stats::{print_failures, print_statistics, write_failures, write_statistics, CrawlStats};
