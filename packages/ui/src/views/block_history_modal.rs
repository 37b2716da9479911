use api::format::{self, DateStyle};
use api::{Block, BlockHistory, BlockType, UserType};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::Avatar;
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaBan, FaCalendar, FaClock, FaClockRotateLeft, FaShield};

use super::ModalOverlay;

#[component]
pub fn BlockHistoryModal(user_id: String, user_type: UserType, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let feedback = use_feedback();

    let kind = user_type.clone();
    let history = use_resource(move || {
        let id = user_id.clone();
        let kind = kind.clone();
        async move {
            match api.client().block_history(&id, &kind).await {
                Ok(history) => Some(history),
                Err(e) => {
                    feedback.quiet_failure(&e, "Error fetching block history");
                    None
                }
            }
        }
    });

    let body = match &*history.read() {
        None => rsx! { div { class: "modal-loading", p { "Loading history..." } } },
        Some(None) => rsx! { div { class: "modal-error", p { "Failed to load block history" } } },
        Some(Some(history)) => rsx! {
            HistorySummary { history: history.clone(), user_type: user_type.clone() }
            div {
                class: "history-timeline",
                h3 { "Block History Timeline" }
                if history.block_history.is_empty() {
                    div {
                        class: "empty-tab",
                        Icon { icon: FaClockRotateLeft, width: 48, height: 48 }
                        p { "No block history found" }
                    }
                } else {
                    div {
                        class: "timeline",
                        for block in history.block_history.iter().cloned() {
                            TimelineEntry { key: "{block.id}", block: block }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        ModalOverlay {
            title: "Block History",
            wide: true,
            on_close: move |_| on_close.call(()),
            div { class: "history-content", {body} }
            div {
                class: "modal-actions",
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}

#[component]
fn HistorySummary(history: BlockHistory, user_type: UserType) -> Element {
    let user = history.user.clone().unwrap_or_default();

    rsx! {
        div {
            class: "user-summary",
            div {
                class: "user-details",
                Avatar {
                    photo: user.profile_photo.clone(),
                    fallback: user.avatar_letter(),
                    class: "avatar avatar-large",
                }
                div {
                    class: "user-info",
                    h3 { "{user.display_name()}" }
                    if let Some(ref email) = user.email {
                        p { class: "user-email", "{email}" }
                    }
                    if let Some(ref phone) = user.phone {
                        p { class: "user-phone", "{phone}" }
                    }
                    span { class: "user-type-badge {user_type}", "{user_type}" }
                }
            }
            div {
                class: "summary-stats",
                div {
                    class: "stat-item",
                    span { class: "stat-value", "{history.total_blocks}" }
                    span { class: "stat-label", "Total Blocks" }
                }
                div {
                    class: "stat-item",
                    span { class: "stat-value", "{history.active_blocks}" }
                    span { class: "stat-label", "Active Blocks" }
                }
            }
        }
    }
}

#[component]
fn TimelineEntry(block: Block) -> Element {
    let blocked = format::date(&block.blocked_at, DateStyle::ShortTime);
    let expires = block.expires_at.map(|at| format::date(&at, DateStyle::ShortTime));
    let unblocked = block.unblocked_at.map(|at| format::date(&at, DateStyle::ShortTime));
    let duration = block.duration();

    rsx! {
        div {
            class: if block.is_active { "timeline-item active" } else { "timeline-item inactive" },
            div {
                class: "timeline-marker",
                if block.is_active {
                    Icon { icon: FaBan, width: 20, height: 20 }
                } else {
                    Icon { icon: FaShield, width: 20, height: 20 }
                }
            }
            div {
                class: "timeline-content",
                div {
                    class: "timeline-header",
                    h4 { if block.is_active { "Active Block" } else { "Block Ended" } }
                    span {
                        class: "block-type-badge {block.block_type}",
                        if block.block_type == BlockType::Temporary {
                            Icon { icon: FaClock, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaBan, width: 14, height: 14 }
                        }
                        " {block.block_type}"
                    }
                }
                div {
                    class: "timeline-details",
                    div { class: "detail-row", Icon { icon: FaCalendar, width: 16, height: 16 } span { "Blocked: {blocked}" } }
                    if let Some(at) = expires {
                        div { class: "detail-row", Icon { icon: FaClock, width: 16, height: 16 } span { "Expires: {at}" } }
                    }
                    if let Some(at) = unblocked {
                        div { class: "detail-row", Icon { icon: FaShield, width: 16, height: 16 } span { "Unblocked: {at}" } }
                    }
                    div { class: "detail-row", Icon { icon: FaClock, width: 16, height: 16 } span { "Duration: {duration}" } }
                    div { class: "reason-box", strong { "Reason:" } p { "{block.reason}" } }
                    if let Some(ref reason) = block.unblock_reason {
                        div { class: "reason-box unblock-reason", strong { "Unblock Reason:" } p { "{reason}" } }
                    }
                }
            }
        }
    }
}
