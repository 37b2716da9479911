use api::format::{self, DateStyle};
use api::{search, Helper};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Avatar, EmptyState, SearchBox, SkeletonCards};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaCalendar, FaEye, FaMagnifyingGlass, FaPhone, FaShieldHalved, FaStar};

use super::HelperDetailsModal;

/// Every helper, approved or not, with a client-side search.
#[component]
pub fn HelpersView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut helpers = use_signal(Vec::<Helper>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut selected = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        match api.client().helpers().await {
            Ok(list) => helpers.set(list),
            Err(e) => feedback.quiet_failure(&e, "Failed to load helpers"),
        }
        loading.set(false);
    });

    if loading() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "All Helpers" } }
                SkeletonCards { count: 4 }
            }
        };
    }

    let filtered = search::filter(helpers.read().as_slice(), &search_term());
    let count = filtered.len();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { "All Helpers" }
                    p { class: "page-subtitle", "{count} Helpers" }
                }
                SearchBox {
                    value: search_term(),
                    placeholder: "Search helpers...",
                    on_input: move |v| search_term.set(v),
                }
            }

            if filtered.is_empty() {
                EmptyState {
                    title: "No helpers found",
                    message: "Try a different name, email or phone number.",
                    icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 48, height: 48 } },
                }
            } else {
                div {
                    class: "card-grid",
                    for helper in filtered {
                        HelperCard {
                            key: "{helper.id}",
                            helper: helper.clone(),
                            on_view: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }

            if let Some(helper_id) = selected() {
                HelperDetailsModal {
                    helper_id: helper_id,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn HelperCard(helper: Helper, on_view: EventHandler<String>) -> Element {
    let initials = format::initials(helper.full_name.as_deref(), &helper.phone);
    let joined = format::date(&helper.created_at, DateStyle::Short);
    let rating = format::rating(helper.average_rating);
    let earnings = format::currency(helper.total_earnings);
    let id = helper.id.clone();

    rsx! {
        div {
            class: "card user-card",
            div {
                class: "user-card-top",
                Avatar { photo: helper.profile_photo.clone(), fallback: initials }
                if helper.is_approved {
                    span { class: "status-badge active", "Active" }
                } else {
                    span { class: "status-badge inactive", "Inactive" }
                }
            }
            h3 { "{helper.display_name()}" }
            if let Some(ref email) = helper.email {
                div { class: "info-row", span { class: "info-label", "Email:" } span { "{email}" } }
            }
            div { class: "info-row", Icon { icon: FaPhone, width: 12, height: 12 } span { "{helper.phone}" } }
            div { class: "info-row", Icon { icon: FaCalendar, width: 12, height: 12 } span { "Joined: {joined}" } }
            div {
                class: "user-stats",
                div { class: "rating", Icon { icon: FaStar, width: 14, height: 14 } span { "{rating}" } }
                div { span { class: "stat-caption", "Tasks:" } span { class: "stat-number", "{helper.completed_tasks}" } }
                div { span { class: "stat-caption", "Earnings:" } span { class: "stat-number", "{earnings}" } }
            }
            if helper.is_verified {
                span { class: "verified-badge", Icon { icon: FaShieldHalved, width: 12, height: 12 } " Verified" }
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
