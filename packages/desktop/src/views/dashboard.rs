use dioxus::prelude::*;
use ui::views::DashboardView;
use ui::{gate, use_auth, Gate, Page};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let decision = gate(&auth.read(), Page::Dashboard);
    match decision {
        Gate::Loading => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Gate::Redirect(landing) => {
            tracing::debug!("No admin session, redirecting to login");
            nav.replace(Route::from(landing));
            rsx! {}
        }
        Gate::Show => rsx! {
            DashboardView {
                on_signed_out: move |_| {
                    nav.replace(Route::Root {});
                },
            }
        },
    }
}
