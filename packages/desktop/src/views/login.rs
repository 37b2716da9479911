use dioxus::prelude::*;
use ui::views::LoginView;
use ui::{gate, use_auth, Gate, Page};

use crate::Route;

/// Login page. Signed-in admins are sent straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if let Gate::Redirect(landing) = gate(&auth.read(), Page::Login) {
        nav.replace(Route::from(landing));
    }

    rsx! {
        LoginView {
            on_signed_in: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
