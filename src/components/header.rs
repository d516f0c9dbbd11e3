//! Header Component
//!
//! Top bar with a greeting and the profile avatar.

use leptos::prelude::*;

use crate::components::Avatar;
use crate::context::use_app_context;
use crate::route::View;
use crate::store::store_profile;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let profile = store_profile(&ctx.store);
    let first_name = profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    view! {
        <header class="top-bar">
            <span class="greeting">{format!("Welcome back, {}", first_name)}</span>
            <button class="avatar-btn" title="Profile" on:click=move |_| ctx.navigate(View::Profile)>
                <Avatar name=profile.name.clone() />
            </button>
        </header>
    }
}
