use api::format::{self, DateStyle};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::Icon;
use crate::icons::{FaCalendar, FaEnvelope, FaPhone, FaShieldHalved, FaUser};

/// The signed-in admin, as stored at login.
#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let Some(admin) = auth().admin().cloned() else {
        return rsx! {
            div { class: "page", div { class: "loading", "Loading profile..." } }
        };
    };

    let role = admin.role_badge();
    let phone = admin.phone_or_placeholder().to_string();
    let created = format::date(&admin.created_at, DateStyle::Long);
    let photo = admin.profile_photo.clone().filter(|p| !p.trim().is_empty());

    rsx! {
        div {
            class: "page profile-page",
            div {
                class: "page-header",
                div {
                    h1 { "Admin Profile" }
                    p { "Manage your account information" }
                }
            }
            div {
                class: "profile-card",
                div {
                    class: "profile-avatar",
                    if let Some(src) = photo {
                        img { src: "{src}", alt: "{admin.full_name}" }
                    } else {
                        div { class: "avatar-placeholder", Icon { icon: FaUser, width: 48, height: 48 } }
                    }
                }
                div {
                    class: "profile-info",
                    h2 { "{admin.full_name}" }
                    div {
                        class: "profile-badge",
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        span { "{role}" }
                    }
                }
                div {
                    class: "profile-details",
                    ProfileDetail { label: "Email Address", value: admin.email.clone(),
                        Icon { icon: FaEnvelope, width: 18, height: 18 }
                    }
                    ProfileDetail { label: "Phone Number", value: phone,
                        Icon { icon: FaPhone, width: 18, height: 18 }
                    }
                    ProfileDetail { label: "Account Created", value: created,
                        Icon { icon: FaCalendar, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileDetail(label: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "detail-item",
            div { class: "detail-icon", {children} }
            div {
                class: "detail-content",
                label { "{label}" }
                p { "{value}" }
            }
        }
    }
}
