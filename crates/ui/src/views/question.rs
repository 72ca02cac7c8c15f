use dioxus::prelude::*;

use crate::vm::{NavDotVm, QuestionVm};

#[component]
pub fn QuestionScreen(
    vm: QuestionVm,
    on_back: EventHandler<()>,
    on_answer: EventHandler<String>,
    on_next: EventHandler<()>,
    on_go_to: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "screen question-screen",
            header { class: "quiz-header",
                button {
                    class: "btn btn-back",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "‹ Back"
                }
                span { class: "category-badge", "{vm.category}" }
                span { class: "position", "{vm.position_label}" }
            }

            section { class: "card question-card",
                h2 { class: "prompt", "{vm.prompt}" }
                div { class: "options",
                    {vm.options.iter().map(|option| {
                        let answer = option.text.clone();
                        rsx! {
                            button {
                                key: "{option.index}",
                                class: option.class,
                                r#type: "button",
                                disabled: option.disabled,
                                onclick: move |_| on_answer.call(answer.clone()),
                                span { class: "option-text", "{option.text}" }
                                {option.marker.map(|marker| rsx! {
                                    span { class: "option-marker", "{marker}" }
                                })}
                            }
                        }
                    })}
                }
            }

            {vm.next_label.map(|label| rsx! {
                div { class: "next-row",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_next.call(()),
                        "{label}"
                    }
                }
            })}

            NavDots { dots: vm.dots.clone(), on_go_to }

            div { class: "running-score", p { "{vm.score_label}" } }
        }
    }
}

#[component]
fn NavDots(dots: Vec<NavDotVm>, on_go_to: EventHandler<usize>) -> Element {
    rsx! {
        nav { class: "card nav-dots",
            {dots.iter().map(|dot| {
                let index = dot.index;
                rsx! {
                    div {
                        key: "{dot.index}",
                        class: "{dot.class}",
                        onclick: move |_| on_go_to.call(index),
                        "{dot.label}"
                    }
                }
            })}
        }
    }
}
