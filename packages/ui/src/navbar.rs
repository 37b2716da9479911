use dioxus::prelude::*;

use crate::activity_log_panel::ActivityLogToggle;
use crate::auth::LogoutButton;
use crate::Icon;
use crate::icons::{FaBars, FaXmark};

/// Dashboard header: mobile menu toggle, title, activity log and logout.
#[component]
pub fn Navbar(
    title: String,
    menu_open: bool,
    on_toggle_menu: EventHandler<()>,
    on_signed_out: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-left",
                button {
                    class: "mobile-menu-btn",
                    onclick: move |_| on_toggle_menu.call(()),
                    if menu_open {
                        Icon { icon: FaXmark, width: 22, height: 22 }
                    } else {
                        Icon { icon: FaBars, width: 22, height: 22 }
                    }
                }
                h1 { "{title}" }
            }
            div {
                class: "navbar-actions",
                ActivityLogToggle {}
                LogoutButton {
                    class: "logout-button",
                    on_signed_out: move |_| on_signed_out.call(()),
                }
            }
        }
    }
}
