//! Shared Widgets
//!
//! Small presentational pieces reused across views.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::format::initials;

/// Current value of the input element that fired `ev`
pub fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// View title with a one-line subtitle
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{title}</h1>
            <p class="muted">{subtitle}</p>
        </div>
    }
}

/// Colored pill label; `tone` picks the color class
#[component]
pub fn Badge(
    #[prop(into)] label: String,
    #[prop(into)] tone: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", tone)>{label}</span>
    }
}

/// Horizontal bar filled to `percent` (0..=100)
#[component]
pub fn ProgressBar(percent: f64) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-fill" style=format!("width: {:.1}%;", percent)></div>
        </div>
    }
}

/// Round avatar showing the initials of `name`
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let class = if large { "avatar avatar-large" } else { "avatar" };
    view! {
        <span class=class title=name.clone()>{initials(&name)}</span>
    }
}

/// Text box bound to `query`
#[component]
pub fn SearchInput(
    query: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(input_value(&ev))
            />
        </div>
    }
}
