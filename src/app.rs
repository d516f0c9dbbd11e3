//! Alumni Network App
//!
//! Root component: owns the app store, follows the URL hash and swaps the
//! current view in and out of the sidebar layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    DashboardView, DonateView, EventsView, FeedView, Header, JobsView, LoginView, NetworkingView,
    NotFoundView, ProfileView, Sidebar, Toaster,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Profile;
use crate::route::{self, View};
use crate::seed;
use crate::store::{store_set_view, store_view, AppState};

/// Component for a view; mounting it seeds the view's own state
fn render_view(current: View) -> AnyView {
    match current {
        View::Login => view! { <LoginView /> }.into_any(),
        View::Dashboard => view! { <DashboardView /> }.into_any(),
        View::Feed => view! { <FeedView /> }.into_any(),
        View::Jobs => view! { <JobsView /> }.into_any(),
        View::Networking => view! { <NetworkingView /> }.into_any(),
        View::Events => view! { <EventsView /> }.into_any(),
        View::Donate => view! { <DonateView /> }.into_any(),
        View::Profile => view! { <ProfileView /> }.into_any(),
        View::NotFound => view! { <NotFoundView /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let profile = seed::profile().unwrap_or_else(|err| {
        log::error!("[APP] failed to load profile: {}", err);
        Profile::default()
    });
    let store = Store::new(AppState::new(route::current_view(), profile));

    // Provide context to all children
    provide_context(AppContext::new(store, config));

    // Back/forward buttons and hand-edited URLs
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        store_set_view(&store, route::current_view());
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        {move || {
            let current = store_view(&store);
            log::debug!("[APP] render {}", current.path());
            if current.has_chrome() {
                view! {
                    <div class="app-layout">
                        <Sidebar />
                        <div class="main-column">
                            <Header />
                            <main class="main-content">{render_view(current)}</main>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                render_view(current)
            }
        }}
        <Toaster />
    }
}
