use dioxus::prelude::*;

#[component]
pub fn EmptyState(title: String, message: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-state-icon", {icon} }
            h3 { "{title}" }
            p { "{message}" }
        }
    }
}
