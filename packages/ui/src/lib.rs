//! This crate contains all shared UI for the admin console.

use dioxus::prelude::{asset, manganis, Asset};

pub mod components;

/// Base stylesheet for every page; linked once by the launcher.
pub const CONSOLE_CSS: Asset = asset!("/assets/styling/console.css");

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{load_preferences, make_session_manager, ConsoleSettings};

mod timer;

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{
    sign_in, sign_out, use_api, use_auth, use_settings, ApiHandle, AuthProvider, AuthState,
    LogoutButton,
};

pub mod routes;
pub use routes::{gate, Gate, Landing, Page};

mod sidebar;
pub use sidebar::{DashboardTab, Sidebar};

pub mod activity_log;
pub use activity_log::{use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod feedback;
pub use feedback::{use_feedback, Feedback};
