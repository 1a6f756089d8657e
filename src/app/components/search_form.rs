use dioxus::prelude::*;

/// VRM search form: one auto-uppercased input and one submit control.
/// The submit button is disabled while a request is outstanding; Enter in
/// the input submits too.
#[component]
pub fn VrmSearchForm(
    vrm: String,
    loading: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "c-search-form",
            label { class: "c-search-form__label", r#for: "vrmSearch",
                "Enter VRM (e.g., MA16 GXX)"
            }

            div { class: "c-search-form__row",
                input {
                    id: "vrmSearch",
                    r#type: "search",
                    class: "c-search-form__input",
                    value: "{vrm}",
                    oninput: move |evt| on_input.call(evt.value()),
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter {
                            on_submit.call(());
                        }
                    },
                }

                button {
                    class: "c-btn c-btn--primary",
                    disabled: loading,
                    onclick: move |_| on_submit.call(()),
                    if loading {
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }
        }
    }
}
