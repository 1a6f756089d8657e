use dioxus::prelude::*;

// Reusable Error Banner Component (BEM: c-banner)
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "c-banner c-banner--error",
            p { class: "c-banner__text", "{message}" }
        }
    }
}

// Informational banner for the backend-supplied message
#[component]
pub fn MessageBanner(message: String) -> Element {
    rsx! {
        div { class: "c-banner c-banner--info",
            p { class: "c-banner__text", "{message}" }
        }
    }
}
