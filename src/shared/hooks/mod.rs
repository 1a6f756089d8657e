// Custom Dioxus hooks
pub mod use_search_state;

pub use use_search_state::{use_search_state, SearchState};
