use dioxus::prelude::*;

use crate::vm::{DashboardVm, UiAction};

#[component]
pub fn DashboardPanel(vm: DashboardVm, on_action: EventHandler<UiAction>) -> Element {
    let start_class = if vm.start_is_primary {
        "btn primary"
    } else {
        "btn secondary"
    };

    rsx! {
        section { class: "dashboard",
            div { class: "dashboard-title",
                h1 { "EquiStudy" }
                p { "Horse Knowledge Master" }
            }
            div { class: "card",
                div { class: "mastery-row",
                    h2 { "Total Mastery" }
                    span { class: "mastery-percent", "{vm.percent}%" }
                }
                div { class: "stats",
                    div { class: "stat",
                        span { class: "stat-label", "Mastered" }
                        span { class: "stat-value", "{vm.mastered}" }
                    }
                    div { class: "stat",
                        span { class: "stat-label", "Total Set" }
                        span { class: "stat-value", "{vm.total}" }
                    }
                }
                div { class: "dashboard-actions",
                    if vm.can_continue {
                        button {
                            id: "dashboard-continue",
                            class: "btn primary",
                            r#type: "button",
                            onclick: move |_| on_action.call(UiAction::Continue),
                            "Continue Session"
                        }
                    }
                    button {
                        id: "dashboard-new-round",
                        class: start_class,
                        r#type: "button",
                        onclick: move |_| on_action.call(UiAction::StartNewRound),
                        "Start New Round"
                    }
                }
            }
            p { class: "hint", "{vm.hint}" }
        }
    }
}
