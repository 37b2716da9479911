use api::DistributionBar;
use dioxus::prelude::*;

/// Horizontal bars, one per status, sized as a share of the section total.
#[component]
pub fn DistributionChart(
    title: String,
    #[props(default)] subtitle: String,
    bars: Vec<DistributionBar>,
) -> Element {
    rsx! {
        div {
            class: "chart-card",
            h3 { class: "chart-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "chart-subtitle", "{subtitle}" }
            }
            div {
                class: "chart-bars",
                for bar in bars {
                    div {
                        key: "{bar.label}",
                        class: "chart-row",
                        span { class: "chart-label", "{bar.label}" }
                        div {
                            class: "chart-track",
                            div {
                                class: "chart-fill chart-fill-{bar.class}",
                                style: "width: {bar.width}%",
                            }
                        }
                        span { class: "chart-value", {api::format::count(bar.value)} }
                    }
                }
            }
        }
    }
}
