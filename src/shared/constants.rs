//! User-facing copy and classification thresholds.

/// Shown when the operator submits an empty or whitespace-only VRM.
pub const VALIDATION_MESSAGE: &str = "Please enter a VRM";

/// Shown for every fetch failure, regardless of cause.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch results. Please try again.";

/// A completed session whose end lies more than this long before the end of
/// the query window renders dimmed. 5 hours, strict comparison.
pub const STALE_AFTER_MS: i64 = 5 * 60 * 60 * 1000;
