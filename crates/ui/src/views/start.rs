use dioxus::prelude::*;

use crate::vm::StartVm;

#[component]
pub fn StartScreen(
    vm: StartVm,
    on_select: EventHandler<String>,
    on_start: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "screen start-screen",
            div { class: "card",
                div { class: "badge-icon", "📖" }
                h1 { class: "title", "Medical Physics" }
                p { class: "subtitle", "A multiple-choice test in medical physics" }

                label { class: "field-label", r#for: "category-select", "Choose a category:" }
                select {
                    id: "category-select",
                    class: "category-select",
                    onchange: move |evt: Event<FormData>| on_select.call(evt.value()),
                    {vm.categories.iter().map(|category| rsx! {
                        option {
                            key: "{category.key}",
                            value: "{category.key}",
                            selected: category.selected,
                            "{category.label}"
                        }
                    })}
                }

                div { class: "info-box",
                    p { "Questions: "
                        span { class: "count", "{vm.question_count}" }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !vm.can_start,
                    onclick: move |_| on_start.call(()),
                    "Start the test"
                }
            }
        }
    }
}
