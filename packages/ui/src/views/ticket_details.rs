use api::format::{self, DateStyle};
use api::{forms, SupportTicket, TicketPriority, TicketReply, TicketStatus};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::Avatar;
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaCircleExclamation, FaComments, FaFileLines, FaLock, FaPaperPlane, FaUser};

use super::ModalOverlay;

#[derive(Clone, Copy, PartialEq)]
enum TicketTab {
    Details,
    Conversation,
}

#[component]
pub fn TicketDetailsModal(
    ticket: SupportTicket,
    on_close: EventHandler<()>,
    on_updated: EventHandler<()>,
    on_replied: EventHandler<()>,
) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let seed = ticket.clone();
    let mut current = use_signal(move || seed);
    let seed = ticket.update_draft();
    let mut draft = use_signal(move || seed);
    let mut tab = use_signal(|| TicketTab::Details);
    let mut reply_message = use_signal(String::new);
    let mut is_internal = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let ticket_id = ticket.ticket_id.clone();

    let update_id = ticket_id.clone();
    let update = move |_| {
        let id = update_id.clone();
        let changes = draft();
        submitting.set(true);
        spawn(async move {
            match api.client().update_ticket(&id, &changes).await {
                Ok(()) => {
                    feedback.success("Ticket updated successfully");
                    on_updated.call(());
                }
                Err(e) => feedback.failure(&e, "Failed to update ticket"),
            }
            submitting.set(false);
        });
    };

    let send_reply = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match forms::reply(&reply_message(), is_internal()) {
            Ok(request) => request,
            Err(e) => {
                feedback.invalid(&e);
                return;
            }
        };
        let id = ticket_id.clone();
        submitting.set(true);
        spawn(async move {
            match api.client().reply_to_ticket(&id, &request).await {
                Ok(()) => {
                    feedback.success("Reply sent successfully");
                    reply_message.set(String::new());
                    is_internal.set(false);
                    on_replied.call(());
                    match api.client().ticket(&id).await {
                        Ok(fresh) => current.set(fresh),
                        Err(e) => feedback.quiet_failure(&e, "Failed to refresh ticket"),
                    }
                }
                Err(e) => feedback.failure(&e, "Failed to send reply"),
            }
            submitting.set(false);
        });
    };

    let shown = current();
    let pending = draft();
    let reply_count = shown.replies.len();
    let creator = shown.user_type.as_ref().map(|t| t.label().to_string()).unwrap_or_default();

    rsx! {
        ModalOverlay {
            title: "Ticket Details",
            wide: true,
            on_close: move |_| on_close.call(()),

            p { class: "ticket-id-header mono", "{shown.ticket_id}" }
            div {
                class: "tabs",
                button {
                    class: if tab() == TicketTab::Details { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| tab.set(TicketTab::Details),
                    Icon { icon: FaFileLines, width: 16, height: 16 }
                    " Details"
                }
                button {
                    class: if tab() == TicketTab::Conversation { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| tab.set(TicketTab::Conversation),
                    Icon { icon: FaComments, width: 16, height: 16 }
                    " Conversation ({reply_count})"
                }
            }

            div {
                class: "tab-content",
                {match tab() {
                    TicketTab::Details => rsx! {
                        TicketInfo { ticket: shown.clone() }
                        div {
                            class: "details-section",
                            h4 { Icon { icon: FaCircleExclamation, width: 18, height: 18 } " Update Ticket" }
                            div {
                                class: "form-row",
                                div {
                                    class: "form-group",
                                    label { r#for: "ticket-status", "Status" }
                                    select {
                                        id: "ticket-status",
                                        value: pending.status.as_str(),
                                        onchange: move |evt| draft.write().status = TicketStatus::from(evt.value()),
                                        for status in TicketStatus::all() {
                                            option {
                                                value: status.as_str(),
                                                selected: status == pending.status,
                                                "{status.label()}"
                                            }
                                        }
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { r#for: "ticket-priority", "Priority" }
                                    select {
                                        id: "ticket-priority",
                                        value: pending.priority.as_str(),
                                        onchange: move |evt| draft.write().priority = TicketPriority::from(evt.value()),
                                        for priority in TicketPriority::all() {
                                            option {
                                                value: priority.as_str(),
                                                selected: priority == pending.priority,
                                                "{priority.label()}"
                                            }
                                        }
                                    }
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: submitting(),
                                onclick: update,
                                if submitting() { "Updating..." } else { "Update Ticket" }
                            }
                        }
                    },
                    TicketTab::Conversation => rsx! {
                        div {
                            class: "conversation",
                            if shown.replies.is_empty() {
                                div {
                                    class: "empty-tab",
                                    Icon { icon: FaComments, width: 48, height: 48 }
                                    p { "No replies yet. Be the first to respond!" }
                                }
                            } else {
                                for reply in shown.replies.iter().cloned() {
                                    ReplyItem { key: "{reply.id}", reply: reply, creator: creator.clone() }
                                }
                            }
                        }
                        form {
                            class: "reply-form",
                            onsubmit: send_reply,
                            h4 { Icon { icon: FaPaperPlane, width: 18, height: 18 } " Send Reply" }
                            textarea {
                                rows: "4",
                                placeholder: "Type your reply here...",
                                value: "{reply_message}",
                                oninput: move |evt| reply_message.set(evt.value()),
                            }
                            div {
                                class: "reply-options",
                                label {
                                    class: "checkbox-row",
                                    input {
                                        r#type: "checkbox",
                                        checked: is_internal(),
                                        onchange: move |evt| is_internal.set(evt.checked()),
                                    }
                                    Icon { icon: FaLock, width: 14, height: 14 }
                                    " Internal Note (Not visible to user)"
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: submitting() || reply_message().trim().is_empty(),
                                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                                    if submitting() { " Sending..." } else { " Send Reply" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn TicketInfo(ticket: SupportTicket) -> Element {
    let created = format::date(&ticket.created_at, DateStyle::LongTime);
    let resolved = ticket.resolved_at.map(|at| format::date(&at, DateStyle::LongTime));
    let status = ticket.status.as_str().replace('_', " ").to_uppercase();
    let priority = ticket.priority.as_str().to_uppercase();
    let user_type = ticket
        .user_type
        .as_ref()
        .map(|t| t.as_str().to_uppercase())
        .unwrap_or_default();

    rsx! {
        div {
            class: "info-grid",
            div { class: "info-item", label { "Ticket ID:" } span { class: "mono", "{ticket.ticket_id}" } }
            div { class: "info-item", label { "Subject:" } span { class: "subject-tag", "{ticket.subject.label()}" } }
            div {
                class: "info-item",
                label { "Current Status:" }
                span { class: "badge badge-{ticket.status.tone().class()}", "{status}" }
            }
            div {
                class: "info-item",
                label { "Priority:" }
                span { class: "priority-badge priority-{ticket.priority}", "{priority}" }
            }
            div { class: "info-item", label { "Created:" } span { "{created}" } }
            if let Some(at) = resolved {
                div { class: "info-item", label { "Resolved:" } span { "{at}" } }
            }
        }

        div {
            class: "details-section",
            h4 { Icon { icon: FaFileLines, width: 18, height: 18 } " Title" }
            p { class: "ticket-title-text", "{ticket.title}" }
            h4 { Icon { icon: FaFileLines, width: 18, height: 18 } " Description" }
            p { class: "description-text", "{ticket.description}" }
            if !ticket.attachments.is_empty() {
                h4 { "Attachments" }
                Attachments { urls: ticket.attachments.clone() }
            }
        }

        div {
            class: "details-section",
            h4 { Icon { icon: FaUser, width: 18, height: 18 } " User Information" }
            {match ticket.user {
                Some(ref user) => rsx! {
                    div {
                        class: "party-card",
                        Avatar {
                            photo: user.profile_photo.clone(),
                            fallback: format::initials(user.full_name.as_deref(), "U"),
                        }
                        div {
                            p { class: "party-name", {user.full_name.clone().unwrap_or_default()} }
                            p { class: "party-type", "{user_type}" }
                            p { class: "party-contact", {user.email.clone().unwrap_or_default()} }
                        }
                    }
                },
                None => rsx! { p { class: "party-missing", "User information not available" } },
            }}
        }
    }
}

#[component]
fn ReplyItem(reply: TicketReply, creator: String) -> Element {
    let sent = format::date(&reply.created_at, DateStyle::LongTime);
    let role = if reply.is_admin_reply { "Admin".to_string() } else { creator };
    let mut class = String::from("reply-item");
    class.push_str(if reply.is_admin_reply { " admin-reply" } else { " user-reply" });
    if reply.is_internal {
        class.push_str(" internal-note");
    }
    let photo = reply.user.as_ref().and_then(|u| u.profile_photo.clone());
    let initials = format::initials(Some(reply.author_name()), "U");

    rsx! {
        div {
            class: "{class}",
            div {
                class: "reply-header",
                div {
                    class: "reply-author",
                    Avatar { photo: photo, fallback: initials, class: "avatar avatar-small" }
                    div {
                        p { class: "author-name", "{reply.author_name()}" }
                        p {
                            class: "author-role",
                            "{role}"
                            if reply.is_internal {
                                Icon { icon: FaLock, width: 12, height: 12 }
                                " Internal Note"
                            }
                        }
                    }
                }
                span { class: "reply-time", "{sent}" }
            }
            div {
                class: "reply-body",
                p { "{reply.message}" }
                if !reply.attachments.is_empty() {
                    Attachments { urls: reply.attachments.clone() }
                }
            }
        }
    }
}

#[component]
fn Attachments(urls: Vec<String>) -> Element {
    let links: Vec<(String, String)> = urls
        .into_iter()
        .enumerate()
        .map(|(index, url)| (format!("Attachment {}", index + 1), url))
        .collect();

    rsx! {
        div {
            class: "attachments-list",
            for (label, url) in links {
                a {
                    key: "{label}",
                    class: "attachment-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{label}"
                }
            }
        }
    }
}
