use dioxus::prelude::*;

use crate::activity_log_panel::ActivityLogPanel;
use crate::navbar::Navbar;
use crate::sidebar::{DashboardTab, Sidebar};

use super::{
    AnalyticsView, BlockedUsersView, HelpersView, HelpseekersView, PendingApprovalsView,
    ProfileView, ReportsView, SupportTicketsView,
};

/// The signed-in shell: sidebar, header and the active page.
#[component]
pub fn DashboardView(on_signed_out: EventHandler<()>) -> Element {
    let mut active = use_signal(DashboardTab::default);
    let mut sidebar_open = use_signal(|| false);

    let select = move |tab: DashboardTab| {
        tracing::debug!("Switching to {}", tab.id());
        active.set(tab);
        sidebar_open.set(false);
    };

    rsx! {
        div {
            class: "dashboard-container",
            Sidebar {
                active: active(),
                open: sidebar_open(),
                on_select: select,
                on_close: move |_| sidebar_open.set(false),
                on_signed_out: move |_| on_signed_out.call(()),
            }
            div {
                class: "dashboard-main",
                Navbar {
                    title: "Admin Dashboard",
                    menu_open: sidebar_open(),
                    on_toggle_menu: move |_| sidebar_open.toggle(),
                    on_signed_out: move |_| on_signed_out.call(()),
                }
                main {
                    class: "dashboard-content",
                    {match active() {
                        DashboardTab::Analytics => rsx! { AnalyticsView {} },
                        DashboardTab::PendingApprovals => rsx! { PendingApprovalsView {} },
                        DashboardTab::AllHelpers => rsx! { HelpersView {} },
                        DashboardTab::AllHelpseekers => rsx! { HelpseekersView {} },
                        DashboardTab::BlockedUsers => rsx! { BlockedUsersView {} },
                        DashboardTab::Reports => rsx! { ReportsView {} },
                        DashboardTab::SupportTickets => rsx! { SupportTicketsView {} },
                        DashboardTab::Profile => rsx! { ProfileView {} },
                    }}
                }
            }
            ActivityLogPanel {}
        }
    }
}
