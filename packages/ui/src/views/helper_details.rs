use api::format::{self, DateStyle};
use api::{Helper, TaskSummary};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::Avatar;
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{
    FaArrowTrendUp, FaCalendar, FaCircleCheck, FaCircleXmark, FaClipboardList, FaDownload,
    FaEnvelope, FaFileLines, FaIndianRupeeSign, FaLocationDot, FaPhone, FaShieldHalved, FaStar,
    FaUpRightFromSquare,
};

use super::{ModalOverlay, TaskHistory};

#[derive(Clone, Copy, PartialEq)]
enum HelperTab {
    Overview,
    Documents,
    Tasks,
}

#[component]
pub fn HelperDetailsModal(helper_id: String, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut tab = use_signal(|| HelperTab::Overview);
    let mut tasks = use_signal(|| Option::<Vec<TaskSummary>>::None);
    let mut tasks_requested = use_signal(|| false);

    let details_id = helper_id.clone();
    let helper = use_resource(move || {
        let id = details_id.clone();
        async move {
            match api.client().helper(&id).await {
                Ok(helper) => Some(helper),
                Err(e) => {
                    feedback.quiet_failure(&e, "Failed to load helper details");
                    None
                }
            }
        }
    });

    let mut open_tasks = move || {
        tab.set(HelperTab::Tasks);
        if tasks_requested() {
            return;
        }
        tasks_requested.set(true);
        let id = helper_id.clone();
        spawn(async move {
            match api.client().helper_tasks(&id).await {
                Ok(list) => tasks.set(Some(list)),
                Err(e) => {
                    feedback.quiet_failure(&e, "Failed to load helper tasks");
                    tasks.set(Some(Vec::new()));
                }
            }
        });
    };

    let body = match &*helper.read() {
        None => rsx! { div { class: "modal-loading", span { class: "spinner" } p { "Loading helper details..." } } },
        Some(None) => rsx! { div { class: "modal-loading", p { "Helper not found" } } },
        Some(Some(helper)) => rsx! {
            HelperProfile { helper: helper.clone() }
            div {
                class: "tabs",
                button {
                    class: if tab() == HelperTab::Overview { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| tab.set(HelperTab::Overview),
                    "Overview"
                }
                button {
                    class: if tab() == HelperTab::Documents { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| tab.set(HelperTab::Documents),
                    "Documents"
                }
                button {
                    class: if tab() == HelperTab::Tasks { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| open_tasks(),
                    "Tasks History"
                }
            }
            div {
                class: "tab-content",
                {match tab() {
                    HelperTab::Overview => rsx! { HelperOverview { helper: helper.clone() } },
                    HelperTab::Documents => rsx! { HelperDocuments { helper: helper.clone() } },
                    HelperTab::Tasks => rsx! { TaskHistory { tasks: tasks(), counterpart_label: "Client" } },
                }}
            }
        },
    };

    rsx! {
        ModalOverlay {
            title: "Helper Details",
            wide: true,
            on_close: move |_| on_close.call(()),
            {body}
        }
    }
}

#[component]
fn HelperProfile(helper: Helper) -> Element {
    let letter = helper
        .full_name
        .as_deref()
        .and_then(|n| n.chars().next())
        .map(|c| c.to_string())
        .unwrap_or_else(|| "H".to_string());
    let rating = format::rating(helper.average_rating);
    let earnings = format::currency(helper.total_earnings);

    rsx! {
        div {
            class: "details-profile",
            Avatar { photo: helper.profile_photo.clone(), fallback: letter, class: "avatar avatar-large" }
            div {
                class: "details-identity",
                h3 { "{helper.display_name()}" }
                div {
                    class: "details-badges",
                    if helper.is_approved {
                        span { class: "status-badge approved", Icon { icon: FaCircleCheck, width: 12, height: 12 } " Approved" }
                    } else {
                        span { class: "status-badge pending", Icon { icon: FaCircleXmark, width: 12, height: 12 } " Pending" }
                    }
                    if helper.is_verified {
                        span { class: "verified-badge", Icon { icon: FaShieldHalved, width: 12, height: 12 } " Verified" }
                    }
                }
            }
        }
        div {
            class: "details-stats",
            DetailStat { value: rating, label: "Rating", Icon { icon: FaStar, width: 22, height: 22 } }
            DetailStat { value: helper.completed_tasks.to_string(), label: "Tasks Done", Icon { icon: FaClipboardList, width: 22, height: 22 } }
            DetailStat { value: earnings, label: "Earnings", Icon { icon: FaIndianRupeeSign, width: 22, height: 22 } }
            DetailStat { value: helper.total_tasks.to_string(), label: "Total Tasks", Icon { icon: FaArrowTrendUp, width: 22, height: 22 } }
        }
    }
}

/// One figure in the header of a details modal.
#[component]
pub fn DetailStat(value: String, label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "detail-stat",
            {children}
            div {
                span { class: "detail-stat-value", "{value}" }
                span { class: "detail-stat-label", "{label}" }
            }
        }
    }
}

/// Icon, caption and value on one line.
#[component]
pub fn ContactRow(label: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "contact-row",
            {children}
            div {
                span { class: "contact-label", "{label}" }
                span { class: "contact-value", "{value}" }
            }
        }
    }
}

#[component]
fn HelperOverview(helper: Helper) -> Element {
    let joined = format::date(&helper.created_at, DateStyle::ShortTime);
    let (status_class, status_text) = if helper.is_approved {
        ("value success", "Approved")
    } else {
        ("value warning", "Pending Approval")
    };

    rsx! {
        div {
            class: "details-section",
            h4 { "Contact Information" }
            ContactRow { label: "Phone", value: helper.phone.clone(), Icon { icon: FaPhone, width: 16, height: 16 } }
            if let Some(ref email) = helper.email {
                ContactRow { label: "Email", value: email.clone(), Icon { icon: FaEnvelope, width: 16, height: 16 } }
            }
            ContactRow { label: "Joined Date", value: joined, Icon { icon: FaCalendar, width: 16, height: 16 } }
            if let Some(ref address) = helper.address {
                ContactRow { label: "Address", value: address.clone(), Icon { icon: FaLocationDot, width: 16, height: 16 } }
            }
        }
        div {
            class: "details-section",
            h4 { "Account Details" }
            div { class: "detail-line", span { class: "label", "Account Status:" } span { class: "{status_class}", "{status_text}" } }
            div { class: "detail-line", span { class: "label", "User ID:" } span { class: "value mono", "{helper.id}" } }
        }
    }
}

#[component]
fn HelperDocuments(helper: Helper) -> Element {
    let documents: Vec<(&'static str, String)> = helper
        .documents()
        .into_iter()
        .map(|(kind, url)| (kind.label(), url.to_string()))
        .collect();

    if documents.is_empty() {
        return rsx! {
            div {
                class: "empty-tab",
                Icon { icon: FaFileLines, width: 48, height: 48 }
                p { "No documents uploaded" }
            }
        };
    }

    rsx! {
        div {
            class: "document-grid",
            for (label, url) in documents {
                div {
                    key: "{label}",
                    class: "document-card",
                    Icon { icon: FaFileLines, width: 24, height: 24 }
                    h4 { "{label}" }
                    div {
                        class: "document-actions",
                        a {
                            class: "btn btn-outline",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaUpRightFromSquare, width: 14, height: 14 }
                            " View"
                        }
                        a {
                            class: "btn btn-secondary",
                            href: "{url}",
                            download: "",
                            Icon { icon: FaDownload, width: 14, height: 14 }
                            " Download"
                        }
                    }
                }
            }
        }
    }
}
