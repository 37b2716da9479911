use api::Pagination;
use dioxus::prelude::*;

/// Previous / Next controls under a paged list. Hidden when everything fits
/// on one page.
#[component]
pub fn PaginationBar(page: u64, pagination: Pagination, on_page: EventHandler<u64>) -> Element {
    if pagination.total_pages <= 1 {
        return rsx! {};
    }
    let total_pages = pagination.total_pages;
    let has_previous = pagination.has_previous(page);
    let has_next = pagination.has_next(page);

    rsx! {
        div {
            class: "pagination",
            button {
                class: "btn btn-secondary",
                disabled: !has_previous,
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "pagination-info", "Page {page} of {total_pages}" }
            button {
                class: "btn btn-secondary",
                disabled: !has_next,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}
