//! Page state definitions for tracking crawl progress
//!
//! A visited address starts in `Fetching` and ends in exactly one terminal state.

use std::fmt;

/// Represents the current state of a visited address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Address has been marked visited and its fetch is in progress
    Fetching,

    // ===== Terminal Success States =====
    /// Page was fetched, extracted and stored in the index
    Indexed,

    // ===== Terminal Error States =====
    /// Transport error, timeout or non-success HTTP status
    FetchFailed,

    /// Content could not be turned into text and links
    ParseFailed,
}

impl PageState {
    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ParseFailed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Indexed => "indexed",
            Self::FetchFailed => "fetch_failed",
            Self::ParseFailed => "parse_failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
