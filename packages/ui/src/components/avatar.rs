use dioxus::prelude::*;

/// Profile photo, or a circle with the given fallback text.
#[component]
pub fn Avatar(
    photo: Option<String>,
    fallback: String,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    let photo = photo.filter(|p| !p.trim().is_empty());
    rsx! {
        if let Some(src) = photo {
            img { class: "{class}", src: "{src}", alt: "{fallback}" }
        } else {
            div { class: "{class} avatar-fallback", "{fallback}" }
        }
    }
}
