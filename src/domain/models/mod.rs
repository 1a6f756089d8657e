// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod outcome;
pub mod search;

pub use outcome::SearchOutcome;
pub use search::{ApiResponse, SearchQuery, SearchResult, SessionState};
