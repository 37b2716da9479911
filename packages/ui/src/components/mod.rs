//! Small building blocks shared by the console pages.

mod badge;
pub use badge::Badge;

mod avatar;
pub use avatar::Avatar;

mod chart;
pub use chart::DistributionChart;

mod empty_state;
pub use empty_state::EmptyState;

mod pagination;
pub use pagination::PaginationBar;

mod search_box;
pub use search_box::SearchBox;

mod skeleton;
pub use skeleton::{SkeletonCards, SkeletonStats};

mod stat_card;
pub use stat_card::StatCard;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
