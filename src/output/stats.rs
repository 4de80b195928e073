//! Statistics for a crawl run
//!
//! The crawl engine updates these counters as it goes; they are purely
//! informational and never influence traversal.

use crate::state::VisitedSet;
use std::io::{self, Write};
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Addresses marked visited (fetch attempted)
    pub pages_visited: u64,

    /// Pages stored in the index
    pub pages_indexed: u64,

    /// Pages lost to transport errors, timeouts or non-success statuses
    pub fetch_failures: u64,

    /// Pages whose content could not be extracted
    pub parse_failures: u64,

    /// Raw links found on indexed pages
    pub links_seen: u64,

    /// Links whose resolved address fell outside the crawl scope
    pub links_out_of_scope: u64,

    /// In-scope links skipped by the depth limit
    pub links_beyond_depth: u64,

    /// Frontier entries abandoned when the page limit was reached
    pub frontier_dropped: u64,

    /// Total time spent crawling
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Share of visited pages that made it into the index, in percent
    pub fn success_rate(&self) -> f64 {
        if self.pages_visited == 0 {
            return 0.0;
        }
        (self.pages_indexed as f64 / self.pages_visited as f64) * 100.0
    }

    pub fn total_errors(&self) -> u64 {
        self.fetch_failures + self.parse_failures
    }
}

/// Writes statistics in a formatted manner
pub fn write_statistics<W: Write>(stats: &CrawlStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Pages visited: {}", stats.pages_visited)?;
    writeln!(out, "  Pages indexed: {}", stats.pages_indexed)?;
    writeln!(out, "  Links found: {}", stats.links_seen)?;
    writeln!(out, "  Links out of scope: {}", stats.links_out_of_scope)?;
    if stats.links_beyond_depth > 0 {
        writeln!(out, "  Links beyond max depth: {}", stats.links_beyond_depth)?;
    }
    if stats.frontier_dropped > 0 {
        writeln!(out, "  Left unvisited (page limit): {}", stats.frontier_dropped)?;
    }
    writeln!(out, "  Elapsed: {:.2?}", stats.elapsed)?;
    writeln!(out)?;

    if stats.total_errors() > 0 {
        writeln!(out, "Error Summary:")?;
        writeln!(out, "  Fetch failures: {}", stats.fetch_failures)?;
        writeln!(out, "  Parse failures: {}", stats.parse_failures)?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Success Rate: {:.1}% ({} / {} pages indexed)",
        stats.success_rate(),
        stats.pages_indexed,
        stats.pages_visited
    )
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStats) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_statistics(stats, &mut handle)
}

/// Writes every failed address with the kind of failure, in visit order
///
/// Writes nothing when no page failed.
pub fn write_failures<W: Write>(visited: &VisitedSet, out: &mut W) -> io::Result<()> {
    let mut failures = visited.failures().peekable();
    if failures.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "Failed pages:")?;
    for (address, state) in failures {
        writeln!(out, "  [{}] {}", state, address)?;
    }
    Ok(())
}

/// Prints failed addresses to stdout
pub fn print_failures(visited: &VisitedSet) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_failures(visited, &mut handle)
}
