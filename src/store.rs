//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! crosses views; each list view seeds its own `ListState` on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Profile;
use crate::notify::Notice;
use crate::route::View;

/// A toast waiting to be dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// View currently on screen
    pub view: View,
    /// Signed-in user's saved profile
    pub profile: Profile,
    /// Toasts on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u32,
}

impl AppState {
    pub fn new(view: View, profile: Profile) -> Self {
        Self {
            view,
            profile,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_view(store: &AppStore) -> View {
    store.view().get()
}

/// Switch views; re-selecting the current view keeps it mounted
pub fn store_set_view(store: &AppStore, view: View) {
    if store.view().get_untracked() != view {
        *store.view().write() = view;
    }
}

pub fn store_profile(store: &AppStore) -> Profile {
    store.profile().get()
}

/// Replace the saved profile
pub fn store_save_profile(store: &AppStore, profile: Profile) {
    *store.profile().write() = profile;
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

/// Queue a toast and return its id
pub fn store_push_toast(store: &AppStore, notice: Notice) -> u32 {
    let id = store.last_toast_id().get_untracked() + 1;
    *store.last_toast_id().write() = id;
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by id
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_toast_queue() {
        Owner::new().with(|| {
            let store = Store::new(AppState::new(View::Feed, Profile::default()));
            let first = store_push_toast(&store, Notice::new("Post Liked!", "You liked a post"));
            let second = store_push_toast(&store, Notice::new("Event Full", "No seats left"));
            assert_eq!((first, second), (1, 2));

            store_dismiss_toast(&store, first);
            let left: Vec<_> = store_toasts(&store).into_iter().map(|t| t.id).collect();
            assert_eq!(left, vec![2]);
        });
    }

    #[test]
    fn test_view_and_profile() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            assert_eq!(store_view(&store), View::Login);
            store_set_view(&store, View::Dashboard);
            assert_eq!(store_view(&store), View::Dashboard);

            let mut profile = store_profile(&store);
            profile.name = "Jane Roe".to_string();
            store_save_profile(&store, profile);
            assert_eq!(store_profile(&store).name, "Jane Roe");
        });
    }
}
