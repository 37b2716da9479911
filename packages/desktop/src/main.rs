use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

use views::{Dashboard, Login, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    let window = WindowBuilder::new()
        .with_title("Dolet Admin")
        .with_resizable(true);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window).with_menu(None))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Stylesheet { href: ui::CONSOLE_CSS }
        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if let ui::Gate::Redirect(landing) = ui::gate(&auth.read(), ui::Page::Root) {
        nav.replace(Route::from(landing));
    }

    rsx! {}
}

impl From<ui::Landing> for Route {
    fn from(landing: ui::Landing) -> Self {
        match landing {
            ui::Landing::Login => Route::Login {},
            ui::Landing::Dashboard => Route::Dashboard {},
        }
    }
}
