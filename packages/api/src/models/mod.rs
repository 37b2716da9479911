//! # Records returned by the admin backend
//!
//! The backend owns every record; the console deserializes them from
//! camelCase JSON and displays them. Two leniencies apply throughout:
//!
//! - Money, ratings and counts may arrive as JSON numbers *or* decimal strings
//!   (SQL `DECIMAL`/`COUNT` columns), so they go through [`lenient`].
//! - Enumerated fields (statuses, categories, ...) keep unknown values in an
//!   `Unrecognized` variant instead of failing the whole list.
//!
//! | Module | Records |
//! |--------|---------|
//! | [`admin`] | [`Admin`], [`AdminSession`], [`LoginRequest`] |
//! | [`user`] | [`Helper`], [`Helpseeker`], [`TaskSummary`], [`UserSummary`] |
//! | [`block`] | [`Block`], [`BlockHistory`], block/unblock requests, [`Pagination`] |
//! | [`report`] | [`Report`], [`ReportStats`], [`ReportUpdate`] |
//! | [`support`] | [`SupportTicket`], [`TicketReply`], [`TicketStats`] |
//! | [`analytics`] | Per-area analytics and [`DashboardAnalytics`] |

/// Declares a string-backed enum that round-trips its wire value and keeps
/// unknown values verbatim.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value this console does not know about yet.
            Unrecognized(String),
        }

        impl $name {
            /// Every known variant, in display order.
            pub fn all() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// The value as sent on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unrecognized(raw) => raw,
                }
            }

            /// Human-readable label; unknown values display verbatim.
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unrecognized(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod admin;
pub mod analytics;
pub mod block;
pub mod lenient;
pub mod report;
pub mod support;
pub mod user;

pub use admin::{Admin, AdminSession, LoginRequest};
pub use analytics::{
    BlockAnalytics, DashboardAnalytics, DistributionBar, HelperAnalytics, HelpseekerAnalytics,
    ReportAnalytics, SupportAnalytics,
};
pub use block::{
    Block, BlockHistory, BlockRequest, BlockStatusFilter, BlockType, BlockedUser,
    BlockedUsersPage, BlockedUsersQuery, Pagination, UnblockRequest, UserType,
    DEFAULT_UNBLOCK_REASON,
};
pub use report::{
    ActionTaken, Report, ReportCategory, ReportParty, ReportStats, ReportStatus, ReportUpdate,
    ReportsQuery,
};
pub use support::{
    ReplyRequest, SupportTicket, TicketAuthor, TicketPriority, TicketReply, TicketStats,
    TicketStatus, TicketSubject, TicketUpdate, TicketsPage, TicketsQuery,
};
pub use user::{Helper, HelperDocument, Helpseeker, TaskSummary, UserSummary};

/// Visual tone of a badge; views map it to a CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Danger,
    Purple,
    Secondary,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Danger => "danger",
            Tone::Purple => "purple",
            Tone::Secondary => "secondary",
        }
    }
}
