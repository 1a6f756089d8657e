//! Parking attendant search page
//!
//! Input handling, fetch orchestration, and result rendering. Submissions
//! are strictly sequential from the operator's point of view; overlapping
//! requests are allowed on the wire and resolved by the request identifier
//! the outcome hands out (latest submission wins).

use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{ErrorBanner, MessageBanner, ResultCard, VrmSearchForm};
use crate::config::SearchConfig;
use crate::shared::hooks::use_search_state;
use crate::shared::logging;
use crate::shared::services::search_vehicle;

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        SearchPage {}
    }
}

#[component]
pub fn SearchPage() -> Element {
    let config = use_hook(SearchConfig::default);
    let query_to = config.query_to.clone();
    let mut state = use_search_state();

    let mut handle_search = move |_| {
        let term = state.trimmed_term();
        if term.is_empty() {
            state.outcome.write().reject_empty_input();
            return;
        }

        let request = state.outcome.write().begin();
        logging::log_search_start(&term, request);

        let config = config.clone();
        let mut outcome = state.outcome;
        spawn(async move {
            match search_vehicle(&config, &term).await {
                Ok(response) => {
                    let result_count = response.results.len();
                    if outcome.write().apply_success(request, response) {
                        logging::log_search_success(&term, request, result_count);
                    } else {
                        logging::log_superseded_response(request);
                    }
                }
                Err(fetch_error) => {
                    logging::log_search_failure(&term, request, fetch_error.cause());
                    if !outcome.write().apply_failure(request) {
                        logging::log_superseded_response(request);
                    }
                }
            }
        });
    };

    let loading = state.outcome.read().loading;

    rsx! {
        main { class: "c-search-page",
            h1 { class: "c-search-page__title", "Parking Attendant Search" }

            VrmSearchForm {
                vrm: state.vrm.read().clone(),
                loading,
                on_input: move |raw| state.set_input(raw),
                on_submit: move |_| handle_search(()),
            }

            if !state.outcome.read().error.is_empty() {
                ErrorBanner { message: state.outcome.read().error.clone() }
            }

            if !state.outcome.read().message.is_empty() {
                MessageBanner { message: state.outcome.read().message.clone() }
            }

            if !state.outcome.read().results.is_empty() {
                section { class: "c-results",
                    h2 { class: "c-results__title", "Results" }

                    div { class: "c-results__list",
                        for result in state.outcome.read().results.clone() {
                            ResultCard { result, query_to: query_to.clone() }
                        }
                    }
                }
            }
        }
    }
}
