use dioxus::prelude::*;

use crate::vm::{HeaderVm, UiAction};

#[component]
pub fn Header(header: HeaderVm, on_action: EventHandler<UiAction>) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "brand",
                span { class: "brand-name", "EquiStudy" }
                span { class: "mastery-label", "{header.label}" }
            }
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {header.progress_percent}%",
                }
            }
            if header.show_exit {
                button {
                    id: "header-exit",
                    class: "btn ghost",
                    r#type: "button",
                    onclick: move |_| on_action.call(UiAction::ExitToDashboard),
                    "Exit"
                }
            }
        }
    }
}
