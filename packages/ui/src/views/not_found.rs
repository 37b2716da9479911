use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCircleExclamation, FaHouse};

#[component]
pub fn NotFoundView(on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notfound-container",
            div {
                class: "notfound-content",
                div { class: "error-icon", Icon { icon: FaCircleExclamation, width: 80, height: 80 } }
                h1 { class: "error-code", "404" }
                h2 { class: "error-title", "Page Not Found" }
                p {
                    class: "error-description",
                    "Oops! The page you're looking for doesn't exist or has been moved."
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_home.call(()),
                    Icon { icon: FaHouse, width: 18, height: 18 }
                    span { "Back to Home" }
                }
            }
        }
    }
}
