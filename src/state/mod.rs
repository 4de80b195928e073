//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: Outcome of a visited address (fetching, indexed, failed)
//! - `VisitedSet`: Every address the crawl has begun processing, with its state

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use visited::VisitedSet;
