use dioxus::prelude::*;

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        section { class: "loading",
            div { class: "spinner" }
            p { "Loading questions..." }
        }
    }
}
