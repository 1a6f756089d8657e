use dioxus::prelude::*;

use crate::domain::models::SearchResult;
use crate::domain::services::{badge_for, display_timestamp, is_exact_match, is_stale};

/// One vehicle match: VRM, session badge, and (when a session exists) the
/// start/end detail line. Exact matches get border emphasis, stale results
/// are dimmed; the two are independent and can combine.
#[component]
pub fn ResultCard(result: SearchResult, query_to: String) -> Element {
    let badge = badge_for(result.session);
    let badge_tone_class = badge.tone.css_class();

    let exact_class = if is_exact_match(&result) {
        "c-result-card--exact"
    } else {
        ""
    };
    let stale_class = if is_stale(result.session_end.as_deref(), &query_to) {
        "c-result-card--old"
    } else {
        ""
    };

    // Spacing below the identity row only exists when a detail line follows.
    let identity_class = if result.has_session() {
        "c-result-card__identity c-result-card__identity--spaced"
    } else {
        "c-result-card__identity"
    };

    let start_iso = machine_timestamp(result.session_start.as_deref());
    let end_iso = machine_timestamp(result.session_end.as_deref());
    let start_display = display_timestamp(result.session_start.as_deref());
    let end_display = display_timestamp(result.session_end.as_deref());

    rsx! {
        div { class: "c-result-card {exact_class} {stale_class}",
            div { class: "{identity_class}",
                span { class: "c-result-card__vrm", "{result.vrm}" }
                span { class: "c-badge {badge_tone_class}", "{badge.label}" }
            }

            if result.has_session() {
                dl { class: "c-result-card__detail",
                    span { class: "c-result-card__detail-item",
                        dt { "Session Start:" }
                        dd {
                            time { datetime: "{start_iso}", "{start_display}" }
                        }
                    }
                    span { class: "c-result-card__detail-item",
                        dt { "Session End:" }
                        dd {
                            time { datetime: "{end_iso}", "{end_display}" }
                        }
                    }
                }
            }
        }
    }
}

/// Machine-readable `datetime` attribute value: the wire timestamp with its
/// space separator swapped for a `T`, or empty when absent.
fn machine_timestamp(raw: Option<&str>) -> String {
    raw.map(|value| value.replacen(' ', "T", 1)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_timestamp_swaps_separator() {
        assert_eq!(
            machine_timestamp(Some("2025-11-11 18:10:00")),
            "2025-11-11T18:10:00"
        );
        assert_eq!(machine_timestamp(None), "");
    }
}
