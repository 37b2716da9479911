use std::time::Duration;

use api::format::{self, DateStyle};
use api::{forms, Helper};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Avatar, EmptyState, SkeletonCards};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaCalendar, FaCheck, FaFileLines, FaPhone, FaTriangleExclamation, FaXmark};

use super::ModalOverlay;

/// Approval toasts stay up longer than the rest.
const APPROVED_TOAST: Duration = Duration::from_secs(4);

#[derive(Clone, PartialEq)]
enum Decision {
    Approve(Helper),
    Reject(Helper),
}

#[component]
pub fn PendingApprovalsView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut helpers = use_signal(Vec::<Helper>::new);
    let mut loading = use_signal(|| true);
    let mut acting_on = use_signal(|| Option::<String>::None);
    let mut decision = use_signal(|| Option::<Decision>::None);
    let mut docs_verified = use_signal(|| false);
    let mut rejection_reason = use_signal(String::new);

    let _loader = use_resource(move || async move {
        loading.set(true);
        match api.client().pending_helpers().await {
            Ok(list) => helpers.set(list),
            Err(e) => feedback.quiet_failure(&e, "Failed to load pending helpers"),
        }
        loading.set(false);
    });

    let mut close = move || {
        decision.set(None);
        docs_verified.set(false);
        rejection_reason.set(String::new());
    };

    let mut approve = move |helper: Helper| {
        if let Err(e) = forms::approval(docs_verified()) {
            feedback.invalid(&e);
            return;
        }
        acting_on.set(Some(helper.id.clone()));
        spawn(async move {
            match api.client().approve_helper(&helper.id).await {
                Ok(()) => {
                    helpers.write().retain(|h| h.id != helper.id);
                    close();
                    feedback.success_for(
                        "Helper approved successfully! They can now receive tasks.",
                        Some(APPROVED_TOAST),
                    );
                }
                Err(e) => feedback.failure(&e, "Failed to approve helper. Please try again."),
            }
            acting_on.set(None);
        });
    };

    let mut reject = move |helper: Helper| {
        let reason = match forms::rejection(&rejection_reason()) {
            Ok(reason) => reason,
            Err(e) => {
                feedback.invalid(&e);
                return;
            }
        };
        acting_on.set(Some(helper.id.clone()));
        spawn(async move {
            match api.client().reject_helper(&helper.id, &reason).await {
                Ok(()) => {
                    helpers.write().retain(|h| h.id != helper.id);
                    close();
                    feedback.success("Helper rejected successfully");
                }
                Err(e) => feedback.failure(&e, "Failed to reject helper. Please try again."),
            }
            acting_on.set(None);
        });
    };

    if loading() && helpers.read().is_empty() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "Pending Helper Approvals" } }
                SkeletonCards {}
            }
        };
    }

    if helpers.read().is_empty() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "Pending Helper Approvals" } }
                EmptyState {
                    title: "All Caught Up!",
                    message: "No pending approvals at the moment.",
                    icon: rsx! { Icon { icon: FaCheck, width: 64, height: 64 } },
                }
            }
        };
    }

    let count = helpers.read().len();
    let busy = acting_on().is_some();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { "Pending Helper Approvals" }
                span { class: "count-badge", "{count} Pending" }
            }
            div {
                class: "card-list",
                for helper in helpers() {
                    PendingHelperCard {
                        key: "{helper.id}",
                        busy: acting_on().as_deref() == Some(helper.id.as_str()),
                        helper: helper.clone(),
                        on_approve: move |h| decision.set(Some(Decision::Approve(h))),
                        on_reject: move |h| decision.set(Some(Decision::Reject(h))),
                    }
                }
            }

            {match decision() {
                Some(Decision::Approve(helper)) => rsx! {
                    ModalOverlay {
                        title: "Approve Helper",
                        on_close: move |_| close(),
                        p {
                            "You are about to approve "
                            strong { {helper.full_name.clone().unwrap_or_else(|| "this helper".to_string())} }
                            "."
                        }
                        div {
                            class: "notice notice-warning",
                            Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
                            p { "After approval, this helper will be able to receive and complete tasks." }
                        }
                        label {
                            class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: docs_verified(),
                                onchange: move |evt| docs_verified.set(evt.checked()),
                            }
                            "I have verified all documents (Aadhar, Address Proof, Driving License)"
                        }
                        div {
                            class: "modal-actions",
                            button { class: "btn btn-secondary", onclick: move |_| close(), "Cancel" }
                            button {
                                class: "btn btn-success",
                                disabled: !docs_verified() || busy,
                                onclick: move |_| approve(helper.clone()),
                                if busy { span { class: "spinner" } } else { "Confirm Approval" }
                            }
                        }
                    }
                },
                Some(Decision::Reject(helper)) => rsx! {
                    ModalOverlay {
                        title: "Reject Helper",
                        on_close: move |_| close(),
                        p {
                            "You are about to reject "
                            strong { {helper.full_name.clone().unwrap_or_else(|| "this helper".to_string())} }
                            "."
                        }
                        div {
                            class: "notice notice-warning",
                            Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
                            p { "This action will notify the helper about the rejection." }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "rejection-reason", "Reason for Rejection *" }
                            textarea {
                                id: "rejection-reason",
                                rows: "4",
                                placeholder: "Please provide a detailed reason for rejection (e.g., Invalid documents, Incomplete information, etc.)",
                                value: "{rejection_reason}",
                                oninput: move |evt| rejection_reason.set(evt.value()),
                            }
                        }
                        div {
                            class: "modal-actions",
                            button { class: "btn btn-secondary", onclick: move |_| close(), "Cancel" }
                            button {
                                class: "btn btn-danger",
                                disabled: rejection_reason().trim().is_empty() || busy,
                                onclick: move |_| reject(helper.clone()),
                                if busy { span { class: "spinner" } } else { "Confirm Rejection" }
                            }
                        }
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn PendingHelperCard(
    helper: Helper,
    busy: bool,
    on_approve: EventHandler<Helper>,
    on_reject: EventHandler<Helper>,
) -> Element {
    let initials = format::initials(helper.full_name.as_deref(), &helper.phone);
    let applied = format::date(&helper.created_at, DateStyle::Short);
    let status = helper.verification_status.clone().unwrap_or_default();
    let documents: Vec<(&'static str, String)> = helper
        .documents()
        .into_iter()
        .map(|(kind, url)| (kind.label(), url.to_string()))
        .collect();
    let approving = helper.clone();
    let rejecting = helper.clone();

    rsx! {
        div {
            class: "card helper-card",
            Avatar { photo: None, fallback: initials }
            div {
                class: "card-body",
                h3 { "{helper.display_name()}" }
                div { class: "info-row", Icon { icon: FaPhone, width: 14, height: 14 } span { "{helper.phone}" } }
                div { class: "info-row", Icon { icon: FaCalendar, width: 14, height: 14 } span { "Applied: {applied}" } }
                div { class: "info-row", Icon { icon: FaFileLines, width: 14, height: 14 } span { "Status: {status}" } }
                div {
                    class: "bank-details",
                    div { strong { "Account Holder:" } span { {helper.account_holder_name.clone().unwrap_or_default()} } }
                    div { strong { "Account Number:" } span { {helper.account_number.clone().unwrap_or_default()} } }
                    div { strong { "IFSC Code:" } span { {helper.ifsc_code.clone().unwrap_or_default()} } }
                }
                div {
                    class: "documents",
                    h4 { "Documents" }
                    div {
                        class: "document-links",
                        for (label, url) in documents {
                            a {
                                key: "{label}",
                                class: "doc-link",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { icon: FaFileLines, width: 14, height: 14 }
                                "{label}"
                            }
                        }
                    }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-success",
                    disabled: busy,
                    onclick: move |_| on_approve.call(approving.clone()),
                    if busy {
                        span { class: "spinner" }
                    } else {
                        Icon { icon: FaCheck, width: 16, height: 16 }
                        "Approve"
                    }
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_reject.call(rejecting.clone()),
                    if busy {
                        span { class: "spinner" }
                    } else {
                        Icon { icon: FaXmark, width: 16, height: 16 }
                        "Reject"
                    }
                }
            }
        }
    }
}
