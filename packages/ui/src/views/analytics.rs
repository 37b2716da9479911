use std::time::Duration;

use api::format;
use api::DashboardAnalytics;
use dioxus::prelude::*;

use crate::auth::{use_api, use_settings};
use crate::components::{DistributionChart, SkeletonStats};
use crate::feedback::use_feedback;
use crate::timer::sleep;
use crate::Icon;
use crate::icons::{FaArrowsRotate, FaHeadset, FaShieldHalved, FaTriangleExclamation, FaUserCheck, FaUsers};

#[component]
pub fn AnalyticsView() -> Element {
    let api = use_api();
    let settings = use_settings();
    let feedback = use_feedback();
    let mut analytics = use_signal(DashboardAnalytics::default);
    let mut loaded = use_signal(|| false);
    let mut refreshing = use_signal(|| false);

    let interval = Duration::from_secs(u64::from(
        settings.read().preferences.dashboard.analytics_refresh_secs,
    ));

    let refresh = move || async move {
        refreshing.set(true);
        match api.client().dashboard_analytics().await {
            Ok(result) => analytics.set(result),
            Err(e) => feedback.quiet_failure(&e, "Error fetching analytics"),
        }
        refreshing.set(false);
        loaded.set(true);
    };

    // Dropped with the component, which stops the polling.
    use_future(move || async move {
        refresh().await;
        if interval.is_zero() {
            return;
        }
        loop {
            sleep(interval).await;
            if !refreshing() {
                refresh().await;
            }
        }
    });

    let data = analytics();
    let helpers = data.helpers.clone().unwrap_or_default();
    let helpseekers = data.helpseekers.clone().unwrap_or_default();
    let blocks = data.blocks.clone().unwrap_or_default();
    let reports = data.reports.clone().unwrap_or_default();
    let support = data.support.clone().unwrap_or_default();

    rsx! {
        div {
            class: "page analytics",
            div {
                class: "page-header",
                div {
                    h2 { "Analytics Overview" }
                    p { class: "page-subtitle", "Real-time insights and system metrics" }
                }
                button {
                    class: if refreshing() { "btn btn-secondary refreshing" } else { "btn btn-secondary" },
                    disabled: refreshing(),
                    onclick: move |_| {
                        spawn(refresh());
                    },
                    Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                    if refreshing() { " Refreshing..." } else { " Refresh" }
                }
            }

            if !loaded() {
                SkeletonStats { count: 5 }
                div {
                    class: "charts-grid",
                    for i in 0..3 {
                        div { key: "{i}", class: "chart-card skeleton-chart", div { class: "skeleton skeleton-line wide" } }
                    }
                }
            } else {
                div {
                    class: "metrics-grid",
                    MetricCard {
                        title: "Total Helpers",
                        value: helpers.total,
                        tone: "helpers",
                        icon: rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
                        span { class: "metric-highlight approved", "{helpers.approved} Active" }
                        span { class: "metric-dot", "•" }
                        span { class: "metric-highlight pending", "{helpers.pending} Pending" }
                    }
                    MetricCard {
                        title: "Total Helpseekers",
                        value: helpseekers.total,
                        tone: "helpseekers",
                        icon: rsx! { Icon { icon: FaUserCheck, width: 24, height: 24 } },
                        span { class: "metric-highlight approved", "{helpseekers.active} Active" }
                        span { class: "metric-dot", "•" }
                        span { class: "metric-highlight inactive", "{helpseekers.inactive} Inactive" }
                    }
                    MetricCard {
                        title: "Blocked Users",
                        value: blocks.total,
                        tone: "blocked",
                        icon: rsx! { Icon { icon: FaShieldHalved, width: 24, height: 24 } },
                        span { class: "metric-highlight", "Active security blocks" }
                    }
                    MetricCard {
                        title: "Reports",
                        value: reports.total,
                        tone: "reports",
                        icon: rsx! { Icon { icon: FaTriangleExclamation, width: 24, height: 24 } },
                        span { class: "metric-highlight pending", "{reports.pending} Pending" }
                        span { class: "metric-dot", "•" }
                        span { class: "metric-highlight approved", "{reports.resolved} Resolved" }
                    }
                    MetricCard {
                        title: "Support Tickets",
                        value: support.total,
                        tone: "support",
                        icon: rsx! { Icon { icon: FaHeadset, width: 24, height: 24 } },
                        span { class: "metric-highlight pending", "{support.open} Open" }
                        span { class: "metric-dot", "•" }
                        span { class: "metric-highlight approved", "{support.resolved} Resolved" }
                    }
                }

                div {
                    class: "charts-grid",
                    if let Some(ref helpers) = data.helpers {
                        DistributionChart {
                            title: "Helpers Distribution",
                            subtitle: "Status breakdown by category",
                            bars: helpers.bars(),
                        }
                    }
                    if let Some(ref reports) = data.reports {
                        DistributionChart {
                            title: "Reports Overview",
                            subtitle: "Current status distribution",
                            bars: reports.bars(),
                        }
                    }
                    if let Some(ref support) = data.support {
                        DistributionChart {
                            title: "Support Tickets",
                            subtitle: "Ticket status breakdown",
                            bars: support.bars(),
                        }
                    }
                }
            }
        }
    }
}

/// Headline number with a one-line breakdown underneath.
#[component]
fn MetricCard(title: String, value: u64, tone: String, icon: Element, children: Element) -> Element {
    let value = format::count(value);
    rsx! {
        div {
            class: "metric-card metric-{tone}",
            div { class: "metric-icon", {icon} }
            h3 { class: "metric-title", "{title}" }
            p { class: "metric-value", "{value}" }
            p { class: "metric-subtitle", {children} }
        }
    }
}
