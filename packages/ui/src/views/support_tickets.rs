use api::format::{self, DateStyle, TICKET_PREVIEW_CHARS};
use api::{
    Pagination, SupportTicket, TicketPriority, TicketStats, TicketStatus, TicketSubject,
    TicketsQuery,
};
use dioxus::prelude::*;

use crate::auth::{use_api, use_settings};
use crate::components::{Badge, EmptyState, PaginationBar, SearchBox, SkeletonCards, StatCard};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{
    FaArrowsRotate, FaCircleCheck, FaCircleExclamation, FaClock, FaComments, FaEye, FaHeadset,
    FaUser,
};

use super::TicketDetailsModal;

const ALL: &str = "all";

#[component]
pub fn SupportTicketsView() -> Element {
    let api = use_api();
    let settings = use_settings();
    let feedback = use_feedback();
    let mut query = use_signal(|| TicketsQuery {
        limit: settings.read().preferences.lists.page_size as u64,
        ..TicketsQuery::default()
    });
    let mut tickets = use_signal(Vec::<SupportTicket>::new);
    let mut pagination = use_signal(Pagination::default);
    let mut stats = use_signal(|| Option::<TicketStats>::None);
    let mut loading = use_signal(|| true);
    let mut search_input = use_signal(String::new);
    let mut selected = use_signal(|| Option::<SupportTicket>::None);

    let mut list = use_resource(move || async move {
        let query = query();
        loading.set(true);
        match api.client().tickets(&query).await {
            Ok(page) => {
                tickets.set(page.tickets);
                pagination.set(page.pagination);
                if let Some(page_stats) = page.stats {
                    stats.set(Some(page_stats));
                }
            }
            Err(e) => feedback.quiet_failure(&e, "Error fetching tickets"),
        }
        loading.set(false);
    });

    let mut statistics = use_resource(move || async move {
        let _ = query();
        match api.client().ticket_statistics().await {
            Ok(result) => stats.set(Some(result)),
            Err(e) => feedback.quiet_failure(&e, "Error fetching statistics"),
        }
    });

    let view_details = move |ticket_id: String| {
        spawn(async move {
            match api.client().ticket(&ticket_id).await {
                Ok(ticket) => selected.set(Some(ticket)),
                Err(e) => feedback.failure(&e, "Failed to fetch ticket details"),
            }
        });
    };

    if loading() && tickets.read().is_empty() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "Support Tickets" } }
                SkeletonCards { count: 4 }
            }
        };
    }

    let current = query();
    let total = stats().map(|s| s.total).unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { Icon { icon: FaHeadset, width: 24, height: 24 } " Support Tickets" }
                    p { class: "page-subtitle", "{total} Total Tickets" }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: loading(),
                    onclick: move |_| {
                        list.restart();
                        statistics.restart();
                    },
                    Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                    "Refresh"
                }
            }

            if let Some(stats) = stats() {
                div {
                    class: "stats-grid",
                    StatCard { label: "Open", value: stats.open, tone: "warning", icon: rsx! { Icon { icon: FaCircleExclamation, width: 24, height: 24 } } }
                    StatCard { label: "In Progress", value: stats.in_progress, tone: "info", icon: rsx! { Icon { icon: FaClock, width: 24, height: 24 } } }
                    StatCard { label: "Waiting", value: stats.waiting_for_response, tone: "purple", icon: rsx! { Icon { icon: FaComments, width: 24, height: 24 } } }
                    StatCard { label: "Resolved", value: stats.resolved, tone: "success", icon: rsx! { Icon { icon: FaCircleCheck, width: 24, height: 24 } } }
                }
            }

            div {
                class: "filters",
                SearchBox {
                    value: search_input(),
                    placeholder: "Search by ticket ID, title, or description...",
                    on_input: move |v| search_input.set(v),
                    on_submit: move |_| {
                        let mut q = query.write();
                        q.search = search_input().trim().to_string();
                        q.page = 1;
                    },
                }
                select {
                    value: current.status.as_ref().map_or(ALL, |s| s.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        let mut q = query.write();
                        q.status = (value != ALL).then(|| TicketStatus::from(value));
                        q.page = 1;
                    },
                    option { value: ALL, "All Status" }
                    for status in TicketStatus::all() {
                        option {
                            value: status.as_str(),
                            selected: current.status.as_ref() == Some(&status),
                            "{status.label()}"
                        }
                    }
                }
                select {
                    value: current.priority.as_ref().map_or(ALL, |p| p.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        let mut q = query.write();
                        q.priority = (value != ALL).then(|| TicketPriority::from(value));
                        q.page = 1;
                    },
                    option { value: ALL, "All Priorities" }
                    for priority in TicketPriority::by_urgency() {
                        option {
                            value: priority.as_str(),
                            selected: current.priority.as_ref() == Some(&priority),
                            "{priority.label()}"
                        }
                    }
                }
                select {
                    value: current.subject.as_ref().map_or(ALL, |s| s.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        let mut q = query.write();
                        q.subject = (value != ALL).then(|| TicketSubject::from(value));
                        q.page = 1;
                    },
                    option { value: ALL, "All Subjects" }
                    for subject in TicketSubject::all() {
                        option {
                            value: subject.as_str(),
                            selected: current.subject.as_ref() == Some(&subject),
                            "{subject.label()}"
                        }
                    }
                }
            }

            if tickets.read().is_empty() {
                EmptyState {
                    title: "No Tickets Found",
                    message: "There are no support tickets matching your criteria.",
                    icon: rsx! { Icon { icon: FaHeadset, width: 64, height: 64 } },
                }
            } else {
                div {
                    class: "card-grid",
                    for ticket in tickets() {
                        TicketCard {
                            key: "{ticket.ticket_id}",
                            ticket: ticket.clone(),
                            on_view: view_details,
                        }
                    }
                }
                PaginationBar {
                    page: current.page,
                    pagination: pagination(),
                    on_page: move |p| query.write().page = p,
                }
            }

            if let Some(ticket) = selected() {
                TicketDetailsModal {
                    ticket: ticket,
                    on_close: move |_| selected.set(None),
                    on_updated: move |_| {
                        list.restart();
                        statistics.restart();
                        selected.set(None);
                    },
                    on_replied: move |_| list.restart(),
                }
            }
        }
    }
}

#[component]
fn TicketCard(ticket: SupportTicket, on_view: EventHandler<String>) -> Element {
    let created = format::date(&ticket.created_at, DateStyle::ShortTime);
    let description = format::truncate(&ticket.description, TICKET_PREVIEW_CHARS);
    let creator = format::title_case(ticket.creator_label());
    let replies = ticket.replies_label();
    let ticket_id = ticket.ticket_id.clone();

    rsx! {
        div {
            class: "card ticket-card",
            div {
                class: "ticket-header",
                div {
                    class: "ticket-id-section",
                    span { class: "ticket-id mono", "{ticket.ticket_id}" }
                    span { class: "priority-badge priority-{ticket.priority}", "{ticket.priority.label()}" }
                }
                Badge { tone: ticket.status.tone(), label: ticket.status.badge_label().to_string() }
            }
            div {
                class: "ticket-body",
                h3 { class: "ticket-title", "{ticket.title}" }
                span { class: "subject-tag", "{ticket.subject.label()}" }
                p { class: "ticket-description", "{description}" }
                div { class: "info-row", Icon { icon: FaUser, width: 16, height: 16 } span { "Created by: {creator}" } }
                div { class: "info-row", Icon { icon: FaClock, width: 16, height: 16 } span { "{created}" } }
                if let Some(replies) = replies {
                    div { class: "info-row", Icon { icon: FaComments, width: 16, height: 16 } span { "{replies}" } }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_view.call(ticket_id.clone()),
                    Icon { icon: FaEye, width: 16, height: 16 }
                    "View Details"
                }
            }
        }
    }
}
