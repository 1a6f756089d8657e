//! Search configuration
//!
//! The backend evaluates session overlap against a fixed query window. The
//! window is configuration rather than a hardcoded constant so a future
//! date-range picker can feed it; the defaults are the placeholder window the
//! product currently ships with.

/// Configuration for one search operation: endpoint plus query window.
///
/// Window bounds are kept as the backend's wire format
/// (`"yyyy-mm-dd hh:mm:ss"`) since they are passed through verbatim as query
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub endpoint: String,
    pub query_from: String,
    pub query_to: String,
}

impl SearchConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:8000/api/v1/vehicle";
    pub const DEFAULT_QUERY_FROM: &'static str = "2025-11-11 18:00:00";
    pub const DEFAULT_QUERY_TO: &'static str = "2025-11-11 23:00:00";

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Override the query window, keeping the endpoint.
    pub fn with_window(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.query_from = from.into();
        self.query_to = to.into();
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            query_from: Self::DEFAULT_QUERY_FROM.to_string(),
            query_to: Self::DEFAULT_QUERY_TO.to_string(),
        }
    }
}
