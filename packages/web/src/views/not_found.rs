use dioxus::prelude::*;
use ui::views::NotFoundView;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        NotFoundView {
            on_home: move |_| {
                nav.push(Route::Root {});
            },
        }
    }
}
