use api::format::{self, DateStyle};
use api::{ActionTaken, Report, ReportParty, ReportStatus, UserType};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::feedback::use_feedback;
use crate::Icon;
use crate::icons::{FaCircleCheck, FaClock, FaFileLines, FaShieldHalved, FaUser};

use super::ModalOverlay;

#[component]
pub fn ReportDetailsModal(
    report: Report,
    on_close: EventHandler<()>,
    on_updated: EventHandler<()>,
) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let seed = report.clone();
    let mut draft = use_signal(move || seed.update_draft());
    let mut submitting = use_signal(|| false);

    let report_id = report.id.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let update = draft();
        let id = report_id.clone();
        submitting.set(true);
        spawn(async move {
            match api.client().update_report(&id, &update).await {
                Ok(()) => {
                    feedback.success("Report updated successfully");
                    on_updated.call(());
                }
                Err(e) => feedback.failure(&e, "Failed to update report"),
            }
            submitting.set(false);
        });
    };

    let short_id = format::short_id(&report.id).to_string();
    let related_task = report
        .task_id
        .clone()
        .map(|id| (id.clone(), format::short_id(&id).to_string()));
    let submitted = format::date(&report.created_at, DateStyle::LongTime);
    let reviewed = report.reviewed_at.map(|at| format::date(&at, DateStyle::LongTime));
    let current = draft();

    rsx! {
        ModalOverlay {
            title: "Report Details",
            wide: true,
            on_close: move |_| on_close.call(()),

            div {
                class: "details-section",
                h4 { Icon { icon: FaFileLines, width: 18, height: 18 } " Report Information" }
                div {
                    class: "info-grid",
                    div {
                        class: "info-item",
                        label { "Report ID:" }
                        span { class: "mono", title: "{report.id}", "{short_id}" }
                    }
                    div {
                        class: "info-item",
                        label { "Category:" }
                        span { class: "category-badge", "{report.category.label()}" }
                    }
                    div {
                        class: "info-item",
                        label { "Current Status:" }
                        span { class: "badge badge-{report.status.tone().class()}", "{report.status_shout()}" }
                    }
                    div {
                        class: "info-item",
                        label { "Submitted:" }
                        span { "{submitted}" }
                    }
                    if let Some((task_id, short_task)) = related_task {
                        div {
                            class: "info-item",
                            label { "Related Task ID:" }
                            span { class: "mono", title: "{task_id}", "{short_task}" }
                        }
                    }
                }
            }

            div {
                class: "details-section",
                h4 { Icon { icon: FaFileLines, width: 18, height: 18 } " Description" }
                p { class: "description-text", "{report.description}" }
            }

            div {
                class: "users-section",
                PartyCard {
                    heading: "Reporter",
                    party: report.reporter().cloned(),
                    user_type: report.reporter_type.clone(),
                    missing: "Reporter information not available",
                    Icon { icon: FaUser, width: 18, height: 18 }
                }
                PartyCard {
                    heading: "Reported User",
                    party: report.reported().cloned(),
                    user_type: report.reported_user_type.clone(),
                    missing: "Reported user information not available",
                    Icon { icon: FaShieldHalved, width: 18, height: 18 }
                }
            }

            form {
                class: "action-form",
                onsubmit: submit,
                h4 { Icon { icon: FaCircleCheck, width: 18, height: 18 } " Take Action" }
                div {
                    class: "form-group",
                    label { r#for: "report-status", "Update Status *" }
                    select {
                        id: "report-status",
                        value: current.status.as_str(),
                        onchange: move |evt| draft.write().status = ReportStatus::from(evt.value()),
                        for status in ReportStatus::all() {
                            option {
                                value: status.as_str(),
                                selected: status == current.status,
                                "{status.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "report-action", "Action Taken *" }
                    select {
                        id: "report-action",
                        value: current.action_taken.as_str(),
                        onchange: move |evt| draft.write().action_taken = ActionTaken::from(evt.value()),
                        for action in ActionTaken::all() {
                            option {
                                value: action.as_str(),
                                selected: action == current.action_taken,
                                "{action.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "report-notes", "Admin Notes" }
                    textarea {
                        id: "report-notes",
                        rows: "4",
                        placeholder: "Add notes about your decision and actions taken...",
                        value: "{current.admin_notes}",
                        oninput: move |evt| draft.write().admin_notes = evt.value(),
                    }
                }
                if let Some(at) = reviewed {
                    div {
                        class: "review-info",
                        Icon { icon: FaClock, width: 16, height: 16 }
                        span { "Last reviewed on {at}" }
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Updating..." } else { "Update Report" }
                    }
                }
            }
        }
    }
}

#[component]
fn PartyCard(
    heading: String,
    party: Option<ReportParty>,
    user_type: UserType,
    missing: String,
    children: Element,
) -> Element {
    let kind = user_type.as_str().to_uppercase();

    rsx! {
        div {
            class: "party-card",
            h4 { {children} " {heading}" }
            {match party {
                Some(party) => rsx! {
                    p { class: "party-name", {party.full_name.unwrap_or_default()} }
                    p { class: "party-type", "{kind}" }
                    if let Some(email) = party.email {
                        p { class: "party-contact", "{email}" }
                    }
                    if let Some(phone) = party.phone {
                        p { class: "party-contact", "{phone}" }
                    }
                },
                None => rsx! { p { class: "party-missing", "{missing}" } },
            }}
        }
    }
}
