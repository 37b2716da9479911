use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaMagnifyingGlass;

/// Text input with a search icon. `on_submit` fires on Enter.
#[component]
pub fn SearchBox(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    #[props(default)] on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                },
            }
        }
    }
}
