use dioxus::prelude::*;

use crate::activity_log::use_activity_log;
use crate::Icon;
use crate::icons::{FaClockRotateLeft, FaXmark};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating list of this session's admin actions, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().is_visible() {
        return rsx! {};
    }

    let entries = log.read().recent();
    let total = log.read().len();
    let failures = log.read().failure_count();
    let failures_only = log.read().failures_only();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                div {
                    strong { "Admin Activity" }
                    p { class: "activity-log-summary", "{total} actions, {failures} failed" }
                }
                div {
                    class: "activity-log-header-actions",
                    label {
                        class: "activity-log-filter",
                        input {
                            r#type: "checkbox",
                            checked: failures_only,
                            onchange: move |evt| log.write().set_failures_only(evt.checked()),
                        }
                        " Failures only"
                    }
                    button {
                        disabled: total == 0,
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        title: "Close",
                        onclick: move |_| log.write().set_visible(false),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            ol {
                class: "activity-log-entries",
                if entries.is_empty() {
                    li {
                        class: "activity-log-empty",
                        if failures_only { "Nothing has failed" } else { "No admin actions yet" }
                    }
                }
                for (index, entry) in entries.into_iter().enumerate() {
                    li {
                        key: "{index}",
                        class: entry.level.class(),
                        time { class: "activity-log-time", "{entry.time()}" }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Navbar button showing how many actions were logged; red once one failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log.read().len();
    let class = if log.read().has_errors() {
        "activity-log-toggle has-errors"
    } else {
        "activity-log-toggle"
    };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }
        button {
            class: class,
            title: "Activity log",
            onclick: move |_| log.write().toggle(),
            Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
            if count > 0 {
                span { "{count}" }
            }
        }
    }
}
