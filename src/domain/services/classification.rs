//! Result classification
//!
//! Derives everything the result list renders from a raw backend record:
//! session badge, normalized timestamps, staleness against the query window,
//! and exact-match emphasis. Pure functions, no rendering concerns.

use chrono::{Duration, NaiveDateTime};

use crate::domain::models::{SearchResult, SessionState};
use crate::shared::constants::STALE_AFTER_MS;

/// Visual tone of a session badge. Binary on purpose: only an ongoing
/// session reads as positive, every other state (including unrecognized
/// ones) is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Positive => "c-badge--positive",
            BadgeTone::Negative => "c-badge--negative",
        }
    }
}

/// Badge derived from a session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Total mapping from session state to badge. Covers the fallback case
/// explicitly so an unexpected wire value can never panic the presenter.
pub fn badge_for(session: SessionState) -> SessionBadge {
    match session {
        SessionState::Partial => SessionBadge {
            label: "Ongoing",
            tone: BadgeTone::Positive,
        },
        SessionState::Full => SessionBadge {
            label: "Session Expired",
            tone: BadgeTone::Negative,
        },
        SessionState::None => SessionBadge {
            label: "No Session Found",
            tone: BadgeTone::Negative,
        },
        SessionState::Unknown => SessionBadge {
            label: "Unknown",
            tone: BadgeTone::Negative,
        },
    }
}

/// Normalize a backend timestamp (`"yyyy-mm-dd hh:mm:ss"`, no timezone) to a
/// naive instant by swapping the space separator for a `T`. Malformed input
/// normalizes to `None` and is logged, never surfaced.
pub fn normalize_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let iso = raw.replacen(' ', "T", 1);
    match NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S") {
        Ok(instant) => Some(instant),
        Err(parse_error) => {
            tracing::warn!(
                timestamp = raw,
                error = %parse_error,
                "Unparseable backend timestamp"
            );
            None
        }
    }
}

/// Human-readable form of an optional backend timestamp. Absent or
/// unparseable input renders as an empty string.
pub fn display_timestamp(raw: Option<&str>) -> String {
    raw.and_then(normalize_timestamp)
        .map(|instant| instant.format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// A result is stale iff its session end is present and lies more than five
/// hours before the end of the query window. `query_to` is the window end,
/// not wall-clock now. The threshold comparison is strict: exactly five
/// hours is not stale.
pub fn is_stale(session_end: Option<&str>, query_to: &str) -> bool {
    let Some(end) = session_end.and_then(normalize_timestamp) else {
        return false;
    };
    let Some(window_end) = normalize_timestamp(query_to) else {
        return false;
    };
    window_end - end > Duration::milliseconds(STALE_AFTER_MS)
}

/// Exact-match emphasis, independent of session state and staleness.
pub fn is_exact_match(result: &SearchResult) -> bool {
    result.distance == 0.0
}
