use api::format::{self, DateStyle};
use api::TaskSummary;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCalendar, FaClipboardList, FaIndianRupeeSign, FaStar};

/// The "Tasks History" tab of the user detail modals.
#[component]
pub fn TaskHistory(tasks: Option<Vec<TaskSummary>>, counterpart_label: String) -> Element {
    let Some(tasks) = tasks else {
        return rsx! { div { class: "modal-loading", p { "Loading tasks..." } } };
    };

    if tasks.is_empty() {
        return rsx! {
            div {
                class: "empty-tab",
                Icon { icon: FaClipboardList, width: 48, height: 48 }
                p { "No tasks found" }
            }
        };
    }

    rsx! {
        div {
            class: "task-list",
            for task in tasks {
                TaskItem { key: "{task.id}", task: task.clone(), counterpart_label: counterpart_label.clone() }
            }
        }
    }
}

#[component]
fn TaskItem(task: TaskSummary, counterpart_label: String) -> Element {
    let created = format::date(&task.created_at, DateStyle::ShortTime);
    let price = format::currency(task.price);
    let counterpart = task
        .helpseeker_name
        .clone()
        .or_else(|| task.helper_name.clone());

    rsx! {
        div {
            class: "task-item",
            div {
                class: "task-header",
                h4 { "{task.title}" }
                span { class: "task-status {task.status}", "{task.status}" }
            }
            if let Some(ref description) = task.description {
                p { class: "task-description", "{description}" }
            }
            div {
                class: "task-meta",
                span { Icon { icon: FaCalendar, width: 12, height: 12 } " {created}" }
                span { Icon { icon: FaIndianRupeeSign, width: 12, height: 12 } " {price}" }
                if let Some(rating) = task.rating {
                    span { Icon { icon: FaStar, width: 12, height: 12 } " {rating}" }
                }
            }
            if let Some(name) = counterpart {
                div { class: "task-client", strong { "{counterpart_label}: " } span { "{name}" } }
            }
        }
    }
}
