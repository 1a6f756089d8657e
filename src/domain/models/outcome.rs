use crate::domain::models::{ApiResponse, SearchResult};
use crate::shared::constants::FETCH_FAILURE_MESSAGE;
use crate::shared::errors::AppError;

/// Transient UI state for the one search the page holds at a time.
///
/// Responses carry the identifier handed out by [`SearchOutcome::begin`];
/// anything but the latest identifier is dropped on arrival, so a slow older
/// request can never overwrite a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub message: String,
    pub error: String,
    pub loading: bool,
    latest_request: u64,
}

impl SearchOutcome {
    /// Empty/whitespace submission. Sets the validation error and nothing
    /// else: prior `results`/`message` are intentionally left in place,
    /// matching shipped behavior.
    pub fn reject_empty_input(&mut self) {
        self.error = AppError::EmptyVrm.to_string();
    }

    /// Start a new search: clear the previous outcome, raise the loading
    /// flag, and hand out the request identifier the response must echo.
    pub fn begin(&mut self) -> u64 {
        self.error.clear();
        self.results.clear();
        self.message.clear();
        self.loading = true;
        self.latest_request += 1;
        self.latest_request
    }

    /// Apply a successful response verbatim (backend ordering preserved).
    /// Returns false when the response belonged to a superseded request and
    /// was dropped.
    pub fn apply_success(&mut self, request: u64, response: ApiResponse) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.results = response.results;
        self.message = response.message;
        self.loading = false;
        true
    }

    /// Apply a fetch failure: one generic user-facing message for every
    /// cause. Whatever `begin` left in `results`/`message` stays as is.
    pub fn apply_failure(&mut self, request: u64) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.error = FETCH_FAILURE_MESSAGE.to_string();
        self.loading = false;
        true
    }

    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SessionState;

    fn sample_result(vrm: &str) -> SearchResult {
        SearchResult {
            distance: 0.0,
            vrm: vrm.to_string(),
            session: SessionState::Partial,
            session_start: Some("2025-11-11 18:10:00".to_string()),
            session_end: None,
        }
    }

    fn sample_response(vrm: &str) -> ApiResponse {
        ApiResponse {
            message: "1 match".to_string(),
            results: vec![sample_result(vrm)],
        }
    }

    #[test]
    fn test_empty_input_sets_error_and_keeps_prior_outcome() {
        let mut outcome = SearchOutcome::default();
        let request = outcome.begin();
        assert!(outcome.apply_success(request, sample_response("MA16 GXX")));

        outcome.reject_empty_input();
        assert_eq!(outcome.error, "Please enter a VRM");
        // The quirk: prior results and message survive a validation failure.
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.message, "1 match");
        assert!(!outcome.loading);
    }

    #[test]
    fn test_begin_clears_previous_outcome_and_raises_loading() {
        let mut outcome = SearchOutcome::default();
        let request = outcome.begin();
        outcome.apply_success(request, sample_response("MA16 GXX"));
        outcome.reject_empty_input();

        outcome.begin();
        assert!(outcome.results.is_empty());
        assert!(outcome.message.is_empty());
        assert!(outcome.error.is_empty());
        assert!(outcome.loading);
    }

    #[test]
    fn test_success_applies_response_verbatim() {
        let mut outcome = SearchOutcome::default();
        let request = outcome.begin();
        let response = ApiResponse {
            message: "2 matches".to_string(),
            results: vec![sample_result("MA16 GXX"), sample_result("MA16 GXY")],
        };
        assert!(outcome.apply_success(request, response.clone()));
        // Backend ordering preserved, nothing re-sorted.
        assert_eq!(outcome.results, response.results);
        assert_eq!(outcome.message, "2 matches");
        assert!(outcome.error.is_empty());
        assert!(!outcome.loading);
    }

    #[test]
    fn test_failure_sets_generic_message_and_stops_loading() {
        let mut outcome = SearchOutcome::default();
        let request = outcome.begin();
        assert!(outcome.apply_failure(request));
        assert_eq!(outcome.error, FETCH_FAILURE_MESSAGE);
        assert!(!outcome.loading);
        // begin() already cleared results; failure does not restore or
        // re-clear them.
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn test_zero_results_is_success_not_error() {
        let mut outcome = SearchOutcome::default();
        let request = outcome.begin();
        let response = ApiResponse {
            message: "No results".to_string(),
            results: vec![],
        };
        assert!(outcome.apply_success(request, response));
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.message, "No results");
        assert!(outcome.error.is_empty());
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut outcome = SearchOutcome::default();
        let first = outcome.begin();
        let second = outcome.begin();

        // The older request resolves after the newer one was issued.
        assert!(!outcome.apply_success(first, sample_response("OLD1 AAA")));
        assert!(outcome.results.is_empty());
        assert!(outcome.loading);

        assert!(outcome.apply_success(second, sample_response("NEW2 BBB")));
        assert_eq!(outcome.results[0].vrm, "NEW2 BBB");
        assert!(!outcome.loading);

        // A stale failure arriving even later must not disturb the outcome.
        assert!(!outcome.apply_failure(first));
        assert!(outcome.error.is_empty());
        assert_eq!(outcome.results[0].vrm, "NEW2 BBB");
    }
}
