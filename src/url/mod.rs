//! URL handling module for Site-Indexer
//!
//! This module joins hyperlink targets onto the crawl's base address and
//! decides whether the joined address stays inside the crawl boundary.

mod resolve;
mod scope;

// Re-export main functions
pub use resolve::resolve;
pub use scope::in_scope;
