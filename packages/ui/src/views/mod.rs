mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod not_found;
pub use not_found::NotFoundView;

mod profile;
pub use profile::ProfileView;

mod analytics;
pub use analytics::AnalyticsView;

mod pending_approvals;
pub use pending_approvals::PendingApprovalsView;

mod task_history;
pub use task_history::TaskHistory;

mod helpers;
pub use helpers::HelpersView;

mod helper_details;
pub use helper_details::HelperDetailsModal;

mod helpseekers;
pub use helpseekers::HelpseekersView;

mod helpseeker_details;
pub use helpseeker_details::HelpseekerDetailsModal;

mod blocked_users;
pub use blocked_users::BlockedUsersView;

mod block_user_modal;
pub use block_user_modal::BlockUserModal;

mod block_history_modal;
pub use block_history_modal::BlockHistoryModal;

mod reports;
pub use reports::ReportsView;

mod report_details;
pub use report_details::ReportDetailsModal;

mod support_tickets;
pub use support_tickets::SupportTicketsView;

mod ticket_details;
pub use ticket_details::TicketDetailsModal;
