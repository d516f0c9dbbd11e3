//! Views
//!
//! The screens of the app and their `#/path` in the URL hash.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Feed,
    Jobs,
    Networking,
    Events,
    Donate,
    Profile,
    NotFound,
}

/// Sidebar entries, in display order
pub const NAV_VIEWS: &[View] = &[
    View::Dashboard,
    View::Feed,
    View::Jobs,
    View::Networking,
    View::Events,
    View::Donate,
];

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/",
            View::Dashboard => "/dashboard",
            View::Feed => "/feed",
            View::Jobs => "/jobs",
            View::Networking => "/networking",
            View::Events => "/events",
            View::Donate => "/donate",
            View::Profile => "/profile",
            View::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Dashboard => "Dashboard",
            View::Feed => "Feed",
            View::Jobs => "Jobs",
            View::Networking => "Networking",
            View::Events => "Events",
            View::Donate => "Donate",
            View::Profile => "Profile",
            View::NotFound => "Not Found",
        }
    }

    /// Map a path back to its view; unknown paths are `NotFound`
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => View::Login,
            "/dashboard" => View::Dashboard,
            "/feed" => View::Feed,
            "/jobs" => View::Jobs,
            "/networking" => View::Networking,
            "/events" => View::Events,
            "/donate" => View::Donate,
            "/profile" => View::Profile,
            _ => View::NotFound,
        }
    }

    /// View named by a URL hash such as `#/feed`
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.trim_start_matches('#'))
    }

    /// Views rendered inside the sidebar layout
    pub fn has_chrome(&self) -> bool {
        !matches!(self, View::Login | View::NotFound)
    }
}

/// View named by the current URL hash
pub fn current_view() -> View {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| View::from_hash(&hash))
        .unwrap_or_default()
}

/// Mirror the view into the URL hash
pub fn push_hash(view: View) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(view.path()) {
            log::warn!("[ROUTE] failed to set hash for {:?}: {:?}", view, err);
        }
    }
}
