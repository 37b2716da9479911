use api::format::{self, DateStyle};
use api::{
    search, Block, BlockStatusFilter, BlockType, BlockedUsersPage, BlockedUsersQuery,
    UnblockRequest, UserType, DEFAULT_UNBLOCK_REASON,
};
use dioxus::prelude::*;

use crate::auth::{use_api, use_settings};
use crate::components::{Avatar, EmptyState, PaginationBar, SearchBox, SkeletonCards};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{
    FaArrowsRotate, FaBan, FaClock, FaClockRotateLeft, FaShieldHalved, FaUserSlash,
};

use super::{BlockHistoryModal, BlockUserModal, ConfirmDialog};

/// `"all"` in a filter dropdown maps to no filter.
const ALL: &str = "all";

#[component]
pub fn BlockedUsersView() -> Element {
    let api = use_api();
    let settings = use_settings();
    let feedback = use_feedback();
    let mut query = use_signal(|| BlockedUsersQuery {
        limit: settings.read().preferences.lists.page_size as u64,
        ..BlockedUsersQuery::default()
    });
    let mut page = use_signal(BlockedUsersPage::default);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut show_block_modal = use_signal(|| false);
    let mut history_for = use_signal(|| Option::<(String, UserType)>::None);
    let mut unblock_target = use_signal(|| Option::<Block>::None);
    let mut unblocking = use_signal(|| false);

    let mut blocks = use_resource(move || async move {
        let query = query();
        loading.set(true);
        match api.client().blocked_users(&query).await {
            Ok(result) => page.set(result),
            Err(e) => feedback.quiet_failure(&e, "Failed to load blocked users"),
        }
        loading.set(false);
    });

    let confirm_unblock = move |_| {
        let Some(block) = unblock_target() else {
            return;
        };
        unblocking.set(true);
        spawn(async move {
            let request = UnblockRequest {
                user_id: block.user_id.clone(),
                user_type: block.user_type.clone(),
                unblock_reason: DEFAULT_UNBLOCK_REASON.to_string(),
            };
            match api.client().unblock_user(&request).await {
                Ok(()) => {
                    feedback.success("User unblocked successfully");
                    blocks.restart();
                }
                Err(e) => feedback.failure(&e, "Failed to unblock user"),
            }
            unblocking.set(false);
            unblock_target.set(None);
        });
    };

    let visible = search::filter(page.read().blocked_users.as_slice(), &search_term());
    let count = visible.len();
    let current = query();
    let pagination = page.read().pagination.clone();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { Icon { icon: FaShieldHalved, width: 24, height: 24 } " Blocked Users Management" }
                    p { class: "page-subtitle", "{count} Blocked Users" }
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| show_block_modal.set(true),
                    Icon { icon: FaBan, width: 16, height: 16 }
                    "Block User"
                }
            }

            div {
                class: "filters",
                SearchBox {
                    value: search_term(),
                    placeholder: "Search by name, email, phone, or reason...",
                    on_input: move |v| search_term.set(v),
                }
                select {
                    value: current.status.as_str(),
                    onchange: move |evt| {
                        let mut q = query.write();
                        q.status = BlockStatusFilter::parse(&evt.value());
                        q.page = 1;
                    },
                    for status in BlockStatusFilter::all() {
                        option { value: status.as_str(), selected: status == current.status, "{status.label()}" }
                    }
                }
                select {
                    value: current.user_type.as_ref().map_or(ALL, |t| t.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        let mut q = query.write();
                        q.user_type = (value != ALL).then(|| UserType::from(value));
                        q.page = 1;
                    },
                    option { value: ALL, "All User Types" }
                    for user_type in UserType::all() {
                        option {
                            value: user_type.as_str(),
                            selected: current.user_type.as_ref() == Some(&user_type),
                            "{user_type.plural_label()}"
                        }
                    }
                }
                select {
                    value: current.block_type.as_ref().map_or(ALL, |t| t.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        let mut q = query.write();
                        q.block_type = (value != ALL).then(|| BlockType::from(value));
                        q.page = 1;
                    },
                    option { value: ALL, "All Block Types" }
                    for block_type in BlockType::all() {
                        option {
                            value: block_type.as_str(),
                            selected: current.block_type.as_ref() == Some(&block_type),
                            "{block_type.label()}"
                        }
                    }
                }
                button {
                    class: "btn btn-icon",
                    title: "Refresh",
                    disabled: loading(),
                    onclick: move |_| blocks.restart(),
                    Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                }
            }

            if loading() {
                SkeletonCards { count: 4 }
            } else if visible.is_empty() {
                EmptyState {
                    title: "No blocked users found",
                    message: "Adjust the filters or block a user.",
                    icon: rsx! { Icon { icon: FaUserSlash, width: 64, height: 64 } },
                }
            } else {
                div {
                    class: "card-grid",
                    for block in visible {
                        BlockCard {
                            key: "{block.id}",
                            block: block.clone(),
                            on_history: move |(id, kind)| history_for.set(Some((id, kind))),
                            on_unblock: move |b| unblock_target.set(Some(b)),
                        }
                    }
                }
                PaginationBar {
                    page: current.page,
                    pagination: pagination,
                    on_page: move |p| query.write().page = p,
                }
            }

            if show_block_modal() {
                BlockUserModal {
                    on_close: move |_| show_block_modal.set(false),
                    on_blocked: move |_| blocks.restart(),
                }
            }

            if let Some((user_id, user_type)) = history_for() {
                BlockHistoryModal {
                    user_id: user_id,
                    user_type: user_type,
                    on_close: move |_| history_for.set(None),
                }
            }

            if unblock_target().is_some() {
                ConfirmDialog {
                    title: "Unblock User",
                    message: "Are you sure you want to unblock this user?",
                    confirm_label: "Unblock",
                    busy: unblocking(),
                    on_confirm: confirm_unblock,
                    on_cancel: move |_| unblock_target.set(None),
                }
            }
        }
    }
}

#[component]
fn BlockCard(
    block: Block,
    on_history: EventHandler<(String, UserType)>,
    on_unblock: EventHandler<Block>,
) -> Element {
    let user = block.user_or_default();
    let email = user.email.clone().unwrap_or_else(|| "N/A".to_string());
    let phone = user.phone.clone().unwrap_or_else(|| "N/A".to_string());
    let blocked_at = format::date(&block.blocked_at, DateStyle::ShortTime);
    let remaining = block.time_remaining(chrono::Utc::now());
    let unblocked_at = block
        .unblocked_at
        .filter(|_| !block.is_active)
        .map(|at| format::date(&at, DateStyle::ShortTime));
    let unblock_reason = block.unblock_reason.clone().filter(|_| !block.is_active);
    let is_temporary = block.block_type == BlockType::Temporary;
    let history_key = (block.user_id.clone(), block.user_type.clone());
    let unblock_copy = block.clone();

    rsx! {
        div {
            class: if block.is_active { "card block-card active-block" } else { "card block-card inactive-block" },
            div {
                class: "block-card-header",
                Avatar { photo: user.profile_photo.clone(), fallback: user.avatar_letter() }
                div {
                    h3 { "{user.display_name()}" }
                    span { class: "user-type-badge {block.user_type}", "{block.user_type}" }
                }
                if block.is_active {
                    span { class: "status-badge blocked", Icon { icon: FaBan, width: 12, height: 12 } " Active" }
                } else {
                    span { class: "status-badge unblocked", "Unblocked" }
                }
            }
            div {
                class: "block-details",
                div { class: "detail-line", span { class: "label", "Email:" } span { class: "value", "{email}" } }
                div { class: "detail-line", span { class: "label", "Phone:" } span { class: "value", "{phone}" } }
                div {
                    class: "detail-line",
                    span { class: "label", "Block Type:" }
                    span {
                        class: "block-type-badge {block.block_type}",
                        if is_temporary {
                            Icon { icon: FaClock, width: 12, height: 12 }
                        } else {
                            Icon { icon: FaBan, width: 12, height: 12 }
                        }
                        " {block.block_type}"
                    }
                }
                if is_temporary {
                    div { class: "detail-line", span { class: "label", "Time Remaining:" } span { class: "value time-remaining", "{remaining}" } }
                }
                div { class: "detail-line", span { class: "label", "Blocked At:" } span { class: "value", "{blocked_at}" } }
                if let Some(at) = unblocked_at {
                    div { class: "detail-line", span { class: "label", "Unblocked At:" } span { class: "value", "{at}" } }
                }
                div { class: "reason", span { class: "label", "Reason:" } p { "{block.reason}" } }
                if let Some(reason) = unblock_reason {
                    div { class: "reason", span { class: "label", "Unblock Reason:" } p { "{reason}" } }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-secondary",
                    title: "View History",
                    onclick: move |_| on_history.call(history_key.clone()),
                    Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
                    "History"
                }
                if block.is_active {
                    button {
                        class: "btn btn-success",
                        title: "Unblock User",
                        onclick: move |_| on_unblock.call(unblock_copy.clone()),
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        "Unblock"
                    }
                }
            }
        }
    }
}
