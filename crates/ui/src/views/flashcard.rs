use dioxus::prelude::*;

use crate::vm::{CardContentVm, CardFaceVm, SideVm, StudyCardVm, UiAction};

#[component]
pub fn StudyPanel(card: StudyCardVm, on_action: EventHandler<UiAction>) -> Element {
    rsx! {
        section { class: "study",
            p { class: "position", "{card.position_label}" }
            match card.content {
                CardContentVm::Ready(face) => rsx! {
                    Flashcard { face, on_action }
                },
                CardContentVm::Missing { id } => rsx! {
                    div { class: "card missing",
                        p { "Card {id} is no longer in the question set." }
                        div { class: "answer-actions",
                            button {
                                id: "study-skip",
                                class: "btn secondary",
                                r#type: "button",
                                onclick: move |_| on_action.call(UiAction::SkipMissing),
                                "Skip card"
                            }
                            button {
                                id: "study-new-round",
                                class: "btn primary",
                                r#type: "button",
                                onclick: move |_| on_action.call(UiAction::StartNewRound),
                                "Start New Round"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn Flashcard(face: CardFaceVm, on_action: EventHandler<UiAction>) -> Element {
    let revealed = face.revealed;
    let card_class = if revealed { "card flashcard revealed" } else { "card flashcard" };

    rsx! {
        div {
            class: card_class,
            onclick: move |_| {
                if !revealed {
                    on_action.call(UiAction::Reveal);
                }
            },
            for side in face.prompts.iter() {
                CardSide { key: "{side.label}", side: side.clone(), kind: "prompt" }
            }
            if revealed {
                hr {}
                for side in face.answers.iter() {
                    CardSide { key: "{side.label}", side: side.clone(), kind: "answer" }
                }
            } else {
                p { class: "reveal-hint", "Tap to reveal answer" }
            }
        }
        if revealed {
            div { class: "answer-actions",
                button {
                    id: "study-needs-review",
                    class: "btn review",
                    r#type: "button",
                    onclick: move |_| on_action.call(UiAction::AnswerIncorrect),
                    "Needs Review"
                }
                button {
                    id: "study-got-it",
                    class: "btn success",
                    r#type: "button",
                    onclick: move |_| on_action.call(UiAction::AnswerCorrect),
                    "Got It"
                }
            }
        }
    }
}

#[component]
fn CardSide(side: SideVm, kind: &'static str) -> Element {
    rsx! {
        div { class: "side {kind}",
            span { class: "side-label", "{side.label}" }
            p { class: "side-text", "{side.text}" }
        }
    }
}
