use api::Tone;
use dioxus::prelude::*;

/// A pill-shaped status label.
#[component]
pub fn Badge(tone: Tone, label: String) -> Element {
    let class = format!("badge badge-{}", tone.class());
    rsx! {
        span { class: "{class}", "{label}" }
    }
}
