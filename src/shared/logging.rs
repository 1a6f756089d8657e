//! Structured logging module for VRM Session Search
//!
//! Provides consistent, contextual logging for the search lifecycle.
//! Diagnostics only; nothing logged here is ever rendered to the operator.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Search,
    Classification,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Search => "search",
            LogOperation::Classification => "classification",
        }
    }
}

/// Log a search submission
pub fn log_search_start(vrm: &str, request: u64) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        vrm = vrm,
        request = request,
        "Starting VRM search"
    );
}

/// Log a successful search response
pub fn log_search_success(vrm: &str, request: u64, result_count: usize) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        vrm = vrm,
        request = request,
        result_count = result_count,
        "Search completed"
    );
}

/// Log a fetch failure (cause stays in the logs, the operator sees only the
/// generic message)
pub fn log_search_failure(vrm: &str, request: u64, cause: &str) {
    tracing::error!(
        operation = LogOperation::Search.as_str(),
        vrm = vrm,
        request = request,
        cause = cause,
        "Search failed"
    );
}

/// Log a response that arrived after a newer search superseded it
pub fn log_superseded_response(request: u64) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        request = request,
        "Dropped response from superseded request"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::Classification.as_str(), "classification");
    }
}
