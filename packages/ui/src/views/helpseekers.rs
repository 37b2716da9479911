use api::format::{self, DateStyle};
use api::{search, Helpseeker};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Avatar, EmptyState, SearchBox, SkeletonCards};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaCalendar, FaEye, FaMagnifyingGlass, FaPhone};

use super::HelpseekerDetailsModal;

#[component]
pub fn HelpseekersView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut helpseekers = use_signal(Vec::<Helpseeker>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut selected = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        match api.client().helpseekers().await {
            Ok(list) => helpseekers.set(list),
            Err(e) => feedback.quiet_failure(&e, "Failed to load helpseekers"),
        }
        loading.set(false);
    });

    if loading() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "All Helpseekers" } }
                SkeletonCards { count: 4 }
            }
        };
    }

    let filtered = search::filter(helpseekers.read().as_slice(), &search_term());
    let count = filtered.len();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { "All Helpseekers" }
                    p { class: "page-subtitle", "{count} Helpseekers" }
                }
                SearchBox {
                    value: search_term(),
                    placeholder: "Search helpseekers...",
                    on_input: move |v| search_term.set(v),
                }
            }

            if filtered.is_empty() {
                EmptyState {
                    title: "No helpseekers found",
                    message: "Try a different name, email or phone number.",
                    icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 48, height: 48 } },
                }
            } else {
                div {
                    class: "card-grid",
                    for helpseeker in filtered {
                        HelpseekerCard {
                            key: "{helpseeker.id}",
                            helpseeker: helpseeker.clone(),
                            on_view: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }

            if let Some(helpseeker_id) = selected() {
                HelpseekerDetailsModal {
                    helpseeker_id: helpseeker_id,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn HelpseekerCard(helpseeker: Helpseeker, on_view: EventHandler<String>) -> Element {
    let initials = format::initials(helpseeker.full_name.as_deref(), &helpseeker.phone);
    let joined = format::date(&helpseeker.created_at, DateStyle::Short);
    let id = helpseeker.id.clone();

    rsx! {
        div {
            class: "card user-card",
            div {
                class: "user-card-top",
                Avatar { photo: helpseeker.profile_photo.clone(), fallback: initials }
                span { class: "status-badge active", "Active" }
            }
            h3 { "{helpseeker.display_name()}" }
            if let Some(ref email) = helpseeker.email {
                div { class: "info-row", span { class: "info-label", "Email:" } span { "{email}" } }
            }
            div { class: "info-row", Icon { icon: FaPhone, width: 12, height: 12 } span { "{helpseeker.phone}" } }
            div { class: "info-row", Icon { icon: FaCalendar, width: 12, height: 12 } span { "Joined: {joined}" } }
            div {
                class: "user-stats",
                div { span { class: "stat-caption", "Tasks Posted:" } span { class: "stat-number", "{helpseeker.total_tasks}" } }
                div { span { class: "stat-caption", "Completed:" } span { class: "stat-number", "{helpseeker.completed_tasks}" } }
            }
            button {
                class: "btn btn-outline btn-block",
                onclick: move |_| on_view.call(id.clone()),
                Icon { icon: FaEye, width: 14, height: 14 }
                "View Details"
            }
        }
    }
}
