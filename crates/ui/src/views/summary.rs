use dioxus::prelude::*;

use crate::vm::{SummaryVm, UiAction};

#[component]
pub fn SummaryPanel(vm: SummaryVm, on_action: EventHandler<UiAction>) -> Element {
    let icon_class = if vm.fully_mastered {
        "summary-icon full"
    } else {
        "summary-icon"
    };

    rsx! {
        section { class: "summary",
            svg {
                class: icon_class,
                view_box: "0 0 24 24",
                path { d: "M20 6 9 17l-5-5" }
            }
            h2 { "Round Finished!" }
            p { "{vm.message}" }
            div { class: "summary-actions",
                button {
                    id: "summary-dashboard",
                    class: "btn primary",
                    r#type: "button",
                    onclick: move |_| on_action.call(UiAction::ExitToDashboard),
                    "Back to Dashboard"
                }
                button {
                    id: "summary-new-round",
                    class: "btn secondary",
                    r#type: "button",
                    onclick: move |_| on_action.call(UiAction::StartNewRound),
                    "Start Over Again"
                }
            }
        }
    }
}
