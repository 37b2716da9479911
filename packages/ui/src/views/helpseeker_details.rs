use api::format::{self, DateStyle};
use api::{Helpseeker, TaskSummary};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::Avatar;
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{
    FaArrowTrendUp, FaCalendar, FaClipboardList, FaEnvelope, FaIndianRupeeSign, FaLocationDot,
    FaPhone,
};

use super::helper_details::{ContactRow, DetailStat};
use super::{ModalOverlay, TaskHistory};

#[derive(Clone, Copy, PartialEq)]
enum HelpseekerTab {
    Overview,
    Tasks,
}

#[component]
pub fn HelpseekerDetailsModal(helpseeker_id: String, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut tab = use_signal(|| HelpseekerTab::Overview);
    let mut tasks = use_signal(|| Option::<Vec<TaskSummary>>::None);
    let mut tasks_requested = use_signal(|| false);

    let details_id = helpseeker_id.clone();
    let helpseeker = use_resource(move || {
        let id = details_id.clone();
        async move {
            match api.client().helpseeker(&id).await {
                Ok(helpseeker) => Some(helpseeker),
                Err(e) => {
                    feedback.quiet_failure(&e, "Failed to load helpseeker details");
                    None
                }
            }
        }
    });

    let mut open_tasks = move || {
        tab.set(HelpseekerTab::Tasks);
        if tasks_requested() {
            return;
        }
        tasks_requested.set(true);
        let id = helpseeker_id.clone();
        spawn(async move {
            match api.client().helpseeker_tasks(&id).await {
                Ok(list) => tasks.set(Some(list)),
                Err(e) => {
                    feedback.quiet_failure(&e, "Failed to load helpseeker tasks");
                    tasks.set(Some(Vec::new()));
                }
            }
        });
    };

    let body = match &*helpseeker.read() {
        None => rsx! { div { class: "modal-loading", span { class: "spinner" } p { "Loading helpseeker details..." } } },
        Some(None) => rsx! { div { class: "modal-loading", p { "Helpseeker not found" } } },
        Some(Some(helpseeker)) => {
            let letter = helpseeker
                .full_name
                .as_deref()
                .and_then(|n| n.chars().next())
                .map(|c| c.to_string())
                .unwrap_or_else(|| "H".to_string());
            let spent = format::currency(helpseeker.total_spent);
            rsx! {
                div {
                    class: "details-profile",
                    Avatar { photo: helpseeker.profile_photo.clone(), fallback: letter, class: "avatar avatar-large" }
                    div {
                        class: "details-identity",
                        h3 { "{helpseeker.display_name()}" }
                        div { class: "details-badges", span { class: "status-badge approved", "Active User" } }
                    }
                }
                div {
                    class: "details-stats",
                    DetailStat { value: helpseeker.total_tasks.to_string(), label: "Tasks Posted", Icon { icon: FaClipboardList, width: 22, height: 22 } }
                    DetailStat { value: helpseeker.completed_tasks.to_string(), label: "Completed", Icon { icon: FaArrowTrendUp, width: 22, height: 22 } }
                    DetailStat { value: spent, label: "Total Spent", Icon { icon: FaIndianRupeeSign, width: 22, height: 22 } }
                }
                div {
                    class: "tabs",
                    button {
                        class: if tab() == HelpseekerTab::Overview { "tab-btn active" } else { "tab-btn" },
                        onclick: move |_| tab.set(HelpseekerTab::Overview),
                        "Overview"
                    }
                    button {
                        class: if tab() == HelpseekerTab::Tasks { "tab-btn active" } else { "tab-btn" },
                        onclick: move |_| open_tasks(),
                        "Tasks History"
                    }
                }
                div {
                    class: "tab-content",
                    {match tab() {
                        HelpseekerTab::Overview => rsx! { HelpseekerOverview { helpseeker: helpseeker.clone() } },
                        HelpseekerTab::Tasks => rsx! { TaskHistory { tasks: tasks(), counterpart_label: "Helper" } },
                    }}
                }
            }
        }
    };

    rsx! {
        ModalOverlay {
            title: "Helpseeker Details",
            wide: true,
            on_close: move |_| on_close.call(()),
            {body}
        }
    }
}

#[component]
fn HelpseekerOverview(helpseeker: Helpseeker) -> Element {
    let joined = format::date(&helpseeker.created_at, DateStyle::ShortTime);

    rsx! {
        div {
            class: "details-section",
            h4 { "Contact Information" }
            ContactRow { label: "Phone", value: helpseeker.phone.clone(), Icon { icon: FaPhone, width: 16, height: 16 } }
            if let Some(ref email) = helpseeker.email {
                ContactRow { label: "Email", value: email.clone(), Icon { icon: FaEnvelope, width: 16, height: 16 } }
            }
            ContactRow { label: "Joined Date", value: joined, Icon { icon: FaCalendar, width: 16, height: 16 } }
            if let Some(ref address) = helpseeker.address {
                ContactRow { label: "Address", value: address.clone(), Icon { icon: FaLocationDot, width: 16, height: 16 } }
            }
        }
        div {
            class: "details-section",
            h4 { "Account Details" }
            div { class: "detail-line", span { class: "label", "User ID:" } span { class: "value mono", "{helpseeker.id}" } }
            div { class: "detail-line", span { class: "label", "Account Status:" } span { class: "value success", "Active" } }
        }
    }
}
