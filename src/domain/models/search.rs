use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Session state as reported by the search backend.
///
/// The wire contract names three values; anything else deserializes to
/// `Unknown` so classification stays total instead of failing the whole
/// response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Session ongoing, no end time yet
    Partial,
    /// Session has a start and an end (completed/expired)
    Full,
    /// No session found for the VRM
    None,
    /// Unrecognized wire value
    #[serde(other)]
    Unknown,
}

/// One vehicle match returned by the search backend. Immutable after receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Distance from an exact/canonical match; 0 means exact
    pub distance: f64,
    /// Registration as returned by the backend (not re-normalized)
    pub vrm: String,
    pub session: SessionState,
    /// Present only when `session != none`, wire format "yyyy-mm-dd hh:mm:ss"
    #[serde(default)]
    pub session_start: Option<String>,
    /// Present only when `session == full`
    #[serde(default)]
    pub session_end: Option<String>,
}

impl SearchResult {
    /// Session detail (start/end line) is rendered only for results that
    /// actually have a session.
    pub fn has_session(&self) -> bool {
        self.session != SessionState::None
    }
}

/// Response envelope from the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub results: Vec<SearchResult>,
}

/// Search parameters, held only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// User input, trimmed and uppercased
    pub vrm: String,
    pub query_from: String,
    pub query_to: String,
}

impl SearchQuery {
    pub fn new(vrm: impl Into<String>, config: &SearchConfig) -> Self {
        Self {
            vrm: vrm.into(),
            query_from: config.query_from.clone(),
            query_to: config.query_to.clone(),
        }
    }
}
