use api::format::{self, DateStyle, NOTES_PREVIEW_CHARS, REPORT_PREVIEW_CHARS};
use api::{search, Report, ReportCategory, ReportStats, ReportStatus, ReportsQuery, UserType};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Badge, EmptyState, SearchBox, SkeletonCards, StatCard};
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{
    FaArrowsRotate, FaCircleCheck, FaCircleXmark, FaClock, FaEye, FaFileLines, FaShieldHalved,
    FaTriangleExclamation, FaUser,
};

use super::ReportDetailsModal;

const ALL: &str = "all";

/// Reported-user filter only distinguishes the two marketplace sides.
fn reportable_user_types() -> [UserType; 2] {
    [UserType::Helper, UserType::Helpseeker]
}

#[component]
pub fn ReportsView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut query = use_signal(ReportsQuery::default);
    let mut reports = use_signal(Vec::<Report>::new);
    let mut stats = use_signal(|| Option::<ReportStats>::None);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Report>::None);

    let mut list = use_resource(move || async move {
        let query = query();
        loading.set(true);
        match api.client().reports(&query).await {
            Ok(result) => reports.set(result),
            Err(e) => feedback.quiet_failure(&e, "Error fetching reports"),
        }
        loading.set(false);
    });

    let mut breakdown = use_resource(move || async move {
        // Re-read on every filter change alongside the list.
        let _ = query();
        match api.client().report_stats().await {
            Ok(result) => stats.set(Some(result)),
            Err(e) => feedback.quiet_failure(&e, "Error fetching stats"),
        }
    });

    let view_details = move |report_id: String| {
        spawn(async move {
            match api.client().report(&report_id).await {
                Ok(report) => selected.set(Some(report)),
                Err(e) => feedback.failure(&e, "Failed to fetch report details"),
            }
        });
    };

    let current = query();

    if loading() && reports.read().is_empty() {
        return rsx! {
            div {
                class: "page",
                div { class: "page-header", h2 { "Reports Management" } }
                SkeletonCards { count: 4 }
            }
        };
    }

    let visible = search::filter(reports.read().as_slice(), &search_term());
    let count = visible.len();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { Icon { icon: FaTriangleExclamation, width: 24, height: 24 } " Reports Management" }
                    p { class: "page-subtitle", "{count} Total Reports" }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: loading(),
                    onclick: move |_| {
                        list.restart();
                        breakdown.restart();
                    },
                    Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                    "Refresh"
                }
            }

            if let Some(stats) = stats() {
                div {
                    class: "stats-grid",
                    StatCard { label: "Pending", value: stats.pending, tone: "warning", icon: rsx! { Icon { icon: FaClock, width: 24, height: 24 } } }
                    StatCard { label: "Under Review", value: stats.under_review, tone: "info", icon: rsx! { Icon { icon: FaEye, width: 24, height: 24 } } }
                    StatCard { label: "Resolved", value: stats.resolved, tone: "success", icon: rsx! { Icon { icon: FaCircleCheck, width: 24, height: 24 } } }
                    StatCard { label: "Dismissed", value: stats.dismissed, tone: "danger", icon: rsx! { Icon { icon: FaCircleXmark, width: 24, height: 24 } } }
                }
            }

            div {
                class: "filters",
                SearchBox {
                    value: search_term(),
                    placeholder: "Search by description, category, or report ID...",
                    on_input: move |v| search_term.set(v),
                }
                select {
                    value: current.status.as_ref().map_or(ALL, |s| s.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        query.write().status = (value != ALL).then(|| ReportStatus::from(value));
                    },
                    option { value: ALL, "All Status" }
                    for status in ReportStatus::all() {
                        option {
                            value: status.as_str(),
                            selected: current.status.as_ref() == Some(&status),
                            "{status.label()}"
                        }
                    }
                }
                select {
                    value: current.category.as_ref().map_or(ALL, |c| c.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        query.write().category = (value != ALL).then(|| ReportCategory::from(value));
                    },
                    option { value: ALL, "All Categories" }
                    for category in ReportCategory::all() {
                        option {
                            value: category.as_str(),
                            selected: current.category.as_ref() == Some(&category),
                            "{category.label()}"
                        }
                    }
                }
                select {
                    value: current.reported_user_type.as_ref().map_or(ALL, |t| t.as_str()),
                    onchange: move |evt| {
                        let value = evt.value();
                        query.write().reported_user_type = (value != ALL).then(|| UserType::from(value));
                    },
                    option { value: ALL, "All User Types" }
                    for user_type in reportable_user_types() {
                        option {
                            value: user_type.as_str(),
                            selected: current.reported_user_type.as_ref() == Some(&user_type),
                            "{user_type.plural_label()}"
                        }
                    }
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: "No Reports Found",
                    message: "There are no reports matching your criteria.",
                    icon: rsx! { Icon { icon: FaFileLines, width: 64, height: 64 } },
                }
            } else {
                div {
                    class: "card-grid",
                    for report in visible {
                        ReportCard {
                            key: "{report.id}",
                            report: report.clone(),
                            on_view: view_details,
                        }
                    }
                }
            }

            if let Some(report) = selected() {
                ReportDetailsModal {
                    report: report,
                    on_close: move |_| selected.set(None),
                    on_updated: move |_| {
                        list.restart();
                        breakdown.restart();
                        selected.set(None);
                    },
                }
            }
        }
    }
}

#[component]
fn ReportCard(report: Report, on_view: EventHandler<String>) -> Element {
    let submitted = format::date(&report.created_at, DateStyle::ShortTime);
    let description = format::truncate(&report.description, REPORT_PREVIEW_CHARS);
    let notes = report
        .admin_notes
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(|n| format::truncate(n, NOTES_PREVIEW_CHARS));
    let reported = format::title_case(report.reported_user_type.as_str());
    let reporter = format::title_case(report.reporter_type.as_str());
    let id = report.id.clone();

    rsx! {
        div {
            class: "card report-card",
            div {
                class: "report-header",
                Badge { tone: report.status.tone(), label: report.status.label().to_string() }
                span { class: "report-category", "{report.category.label()}" }
            }
            div {
                class: "report-body",
                div { class: "info-row", Icon { icon: FaUser, width: 16, height: 16 } span { class: "label", "Reported User:" } span { class: "value", "{reported}" } }
                div { class: "info-row", Icon { icon: FaShieldHalved, width: 16, height: 16 } span { class: "label", "Reporter:" } span { class: "value", "{reporter}" } }
                div { class: "info-row", Icon { icon: FaClock, width: 16, height: 16 } span { class: "label", "Submitted:" } span { class: "value", "{submitted}" } }
                p { class: "report-description", "{description}" }
                if let Some(notes) = notes {
                    div { class: "admin-notes", strong { "Admin Notes: " } "{notes}" }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_view.call(id.clone()),
                    Icon { icon: FaEye, width: 16, height: 16 }
                    "View Details"
                }
            }
        }
    }
}
