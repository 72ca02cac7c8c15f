use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsScreen(vm: ResultsVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen results-screen",
            div { class: "card",
                div { class: "badge-icon award", "🏆" }
                h2 { class: "title", "Test complete!" }
                div { class: "score-box",
                    p { class: "percentage", "{vm.percentage_label}" }
                    p { class: "summary", "{vm.summary_label}" }
                }
                p { class: vm.message_class, "{vm.message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "↻ Take it again"
                }
            }
        }
    }
}
