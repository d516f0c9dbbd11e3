//! UI Components
//!
//! Shared widgets, layout chrome and one component per view.

mod widgets;
mod sidebar;
mod header;
mod toaster;
mod login_view;
mod dashboard_view;
mod feed_view;
mod jobs_view;
mod networking_view;
mod events_view;
mod donate_view;
mod profile_view;
mod not_found_view;

pub use widgets::{input_value, Avatar, Badge, PageHeader, ProgressBar, SearchInput};
pub use sidebar::Sidebar;
pub use header::Header;
pub use toaster::Toaster;
pub use login_view::LoginView;
pub use dashboard_view::DashboardView;
pub use feed_view::FeedView;
pub use jobs_view::JobsView;
pub use networking_view::NetworkingView;
pub use events_view::EventsView;
pub use donate_view::DonateView;
pub use profile_view::ProfileView;
pub use not_found_view::NotFoundView;
