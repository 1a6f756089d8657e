use dioxus::prelude::*;

use crate::domain::models::SearchOutcome;

/// Search state management hook
#[derive(Clone, Copy)]
pub struct SearchState {
    /// Pending search term, continuously uppercased as the operator types
    pub vrm: Signal<String>,
    /// Outcome of the latest search (results, message, error, loading)
    pub outcome: Signal<SearchOutcome>,
}

impl SearchState {
    /// Store raw keyboard input, uppercased.
    pub fn set_input(&mut self, raw: String) {
        self.vrm.set(raw.to_uppercase());
    }

    /// The trimmed term a submission would search for.
    pub fn trimmed_term(&self) -> String {
        self.vrm.read().trim().to_string()
    }
}

/// Hook to manage search state
pub fn use_search_state() -> SearchState {
    let vrm = use_signal(String::new);
    let outcome = use_signal(SearchOutcome::default);

    SearchState { vrm, outcome }
}
