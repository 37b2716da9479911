use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaXmark;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card modal-wide" } else { "modal-card" },
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Yes/no prompt for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| on_cancel.call(()),
            p { class: "confirm-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Working..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
