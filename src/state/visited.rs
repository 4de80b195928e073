use crate::state::PageState;
use std::collections::HashMap;

/// Set of addresses a crawl has begun processing
///
/// Membership is decided when an address is first marked, before it is
/// fetched, so a failing or slow address can never be entered twice. Each
/// member carries its latest `PageState`; visit order is kept as well.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    states: HashMap<String, PageState>,
    order: Vec<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an address as visited in the `Fetching` state
    ///
    /// Returns false (and changes nothing) if the address was already visited.
    pub fn mark(&mut self, address: &str) -> bool {
        if self.states.contains_key(address) {
            return false;
        }

        self.states.insert(address.to_string(), PageState::Fetching);
        self.order.push(address.to_string());
        true
    }

    /// Records the outcome for an already visited address
    ///
    /// Unknown addresses are ignored: an outcome never implies membership.
    pub fn set_state(&mut self, address: &str, state: PageState) {
        if let Some(current) = self.states.get_mut(address) {
            *current = state;
        }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.states.contains_key(address)
    }

    pub fn state(&self, address: &str) -> Option<PageState> {
        self.states.get(address).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Addresses in the order they were first visited
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Failed addresses with their error state, in visit order
    pub fn failures(&self) -> impl Iterator<Item = (&str, PageState)> {
        self.order.iter().filter_map(move |address| {
            let state = self.states.get(address).copied()?;
            state.is_error().then_some((address.as_str(), state))
        })
    }
}
