//! In-memory text index of crawled pages
//!
//! The index maps each successfully crawled address to the plain text
//! extracted from it. Entries keep the order in which they were first
//! inserted, which for a crawl is depth-first discovery order.

mod search;

pub use search::search;

use std::collections::HashMap;

/// A single indexed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// The address as it was fetched
    pub address: String,

    /// Plain text extracted from the page
    pub text: String,
}

/// Insertion-ordered mapping from address to page text
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
}

impl Index {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the text for an address
    ///
    /// A new address is appended at the end. Re-inserting an existing address
    /// replaces its text but keeps its original position.
    pub fn insert(&mut self, address: impl Into<String>, text: impl Into<String>) {
        let address = address.into();
        let text = text.into();

        if let Some(&pos) = self.positions.get(&address) {
            self.entries[pos].text = text;
            return;
        }

        self.positions.insert(address.clone(), self.entries.len());
        self.entries.push(IndexEntry { address, text });
    }

    /// Returns the text stored for an address
    pub fn get(&self, address: &str) -> Option<&str> {
        self.positions
            .get(address)
            .map(|&pos| self.entries[pos].text.as_str())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.positions.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Addresses in insertion order
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.address.as_str())
    }

    /// Finds addresses whose text contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<String> {
        search(self, keyword)
    }
}

impl<A, T> FromIterator<(A, T)> for Index
where
    A: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, T)>>(iter: I) -> Self {
        let mut index = Index::new();
        for (address, text) in iter {
            index.insert(address, text);
        }
        index
    }
}
