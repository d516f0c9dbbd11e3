//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::notify::Notice;
use crate::route::{push_hash, View};
use crate::store::{store_dismiss_toast, store_push_toast, store_set_view, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Switch to another view
    pub fn navigate(&self, view: View) {
        log::debug!("[APP] navigate to {}", view.path());
        store_set_view(&self.store, view);
        push_hash(view);
    }

    /// Show a toast and dismiss it after the configured delay
    pub fn notify(&self, notice: Notice) {
        let store = self.store;
        let id = store_push_toast(&store, notice);
        let delay = self.config.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn dismiss(&self, toast_id: u32) {
        store_dismiss_toast(&self.store, toast_id);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
