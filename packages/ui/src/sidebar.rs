use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::Icon;
use crate::icons::{
    FaBan, FaChartColumn, FaFlag, FaHeadset, FaUser, FaUserCheck, FaUsers, FaXmark,
};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// The pages reachable from the dashboard sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    Analytics,
    #[default]
    PendingApprovals,
    AllHelpers,
    AllHelpseekers,
    BlockedUsers,
    Reports,
    SupportTickets,
    Profile,
}

impl DashboardTab {
    /// Sidebar order.
    pub fn all() -> [Self; 8] {
        [
            Self::Analytics,
            Self::PendingApprovals,
            Self::AllHelpers,
            Self::AllHelpseekers,
            Self::BlockedUsers,
            Self::Reports,
            Self::SupportTickets,
            Self::Profile,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::PendingApprovals => "pending",
            Self::AllHelpers => "all-helpers",
            Self::AllHelpseekers => "all-helpseekers",
            Self::BlockedUsers => "blocked-users",
            Self::Reports => "reports",
            Self::SupportTickets => "support-tickets",
            Self::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::PendingApprovals => "Pending Helper Approval",
            Self::AllHelpers => "All Helpers",
            Self::AllHelpseekers => "All Helpseekers",
            Self::BlockedUsers => "Blocked Users",
            Self::Reports => "Reports",
            Self::SupportTickets => "Support Tickets",
            Self::Profile => "Profile",
        }
    }

    fn icon(self) -> Element {
        match self {
            Self::Analytics => rsx! { Icon { icon: FaChartColumn, width: 18, height: 18 } },
            Self::PendingApprovals => rsx! { Icon { icon: FaUserCheck, width: 18, height: 18 } },
            Self::AllHelpers => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
            Self::AllHelpseekers => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
            Self::BlockedUsers => rsx! { Icon { icon: FaBan, width: 18, height: 18 } },
            Self::Reports => rsx! { Icon { icon: FaFlag, width: 18, height: 18 } },
            Self::SupportTickets => rsx! { Icon { icon: FaHeadset, width: 18, height: 18 } },
            Self::Profile => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
        }
    }
}

#[component]
pub fn Sidebar(
    active: DashboardTab,
    open: bool,
    on_select: EventHandler<DashboardTab>,
    on_close: EventHandler<()>,
    on_signed_out: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        if open {
            div {
                class: "sidebar-overlay",
                onclick: move |_| on_close.call(()),
            }
        }

        aside {
            class: if open { "sidebar sidebar-open" } else { "sidebar" },
            div {
                class: "sidebar-header",
                div {
                    class: "sidebar-logo",
                    div { class: "logo-icon", "D" }
                    h2 { "Dolet Admin" }
                }
                button {
                    class: "sidebar-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
            }

            nav {
                class: "sidebar-nav",
                for tab in DashboardTab::all() {
                    button {
                        key: "{tab.id()}",
                        class: if tab == active { "nav-item active" } else { "nav-item" },
                        onclick: move |_| on_select.call(tab),
                        {tab.icon()}
                        span { "{tab.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-footer",
                LogoutButton {
                    class: "logout-btn",
                    on_signed_out: move |_| on_signed_out.call(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_unique_and_labelled() {
        let tabs = DashboardTab::all();
        let mut ids: Vec<&str> = tabs.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tabs.len());
        assert!(tabs.iter().all(|t| !t.label().is_empty()));
    }

    #[test]
    fn test_dashboard_opens_on_pending_approvals() {
        assert_eq!(DashboardTab::default(), DashboardTab::PendingApprovals);
        assert_eq!(DashboardTab::default().label(), "Pending Helper Approval");
    }
}
