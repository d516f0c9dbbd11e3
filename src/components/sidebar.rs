//! Sidebar Component
//!
//! Left navigation with the profile shortcut and logout.

use leptos::prelude::*;

use crate::components::Avatar;
use crate::context::use_app_context;
use crate::route::{View, NAV_VIEWS};
use crate::store::{store_profile, store_view};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let is_current = move |view: View| store_view(&ctx.store) == view;

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-mark">"🎓"</span>
                <span class="brand-name">"Alumni Network"</span>
            </div>

            <nav class="sidebar-nav">
                {NAV_VIEWS.iter().map(|&target| {
                    view! {
                        <button
                            class=move || if is_current(target) { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.navigate(target)
                        >
                            {target.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="sidebar-user">
                    {move || view! { <Avatar name=store_profile(&ctx.store).name /> }}
                    <span>{move || store_profile(&ctx.store).name}</span>
                </div>
                <button
                    class=move || if is_current(View::Profile) { "nav-btn small active" } else { "nav-btn small" }
                    on:click=move |_| ctx.navigate(View::Profile)
                >
                    "Profile"
                </button>
                <button class="nav-btn small danger" on:click=move |_| {
                    log::info!("[APP] logout");
                    ctx.navigate(View::Login);
                }>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
