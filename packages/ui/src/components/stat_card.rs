use dioxus::prelude::*;

#[component]
pub fn StatCard(
    label: String,
    value: u64,
    #[props(default = "default".to_string())] tone: String,
    icon: Element,
) -> Element {
    let value = api::format::count(value);
    rsx! {
        div {
            class: "stat-card stat-{tone}",
            div { class: "stat-icon", {icon} }
            div {
                class: "stat-body",
                span { class: "stat-label", "{label}" }
                span { class: "stat-value", "{value}" }
            }
        }
    }
}
