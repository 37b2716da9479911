use dioxus::prelude::*;

/// Grey placeholder cards shown while a list loads.
#[component]
pub fn SkeletonCards(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div {
            class: "card-list",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "card skeleton-card",
                    div { class: "skeleton skeleton-avatar" }
                    div {
                        class: "skeleton-lines",
                        div { class: "skeleton skeleton-line wide" }
                        div { class: "skeleton skeleton-line" }
                        div { class: "skeleton skeleton-line short" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkeletonStats(#[props(default = 4)] count: usize) -> Element {
    rsx! {
        div {
            class: "stats-grid",
            for i in 0..count {
                div { key: "{i}", class: "stat-card skeleton-stat",
                    div { class: "skeleton skeleton-line short" }
                    div { class: "skeleton skeleton-number" }
                }
            }
        }
    }
}
