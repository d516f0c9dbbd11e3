//! Not Found View

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::View;

#[component]
pub fn NotFoundView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <button class="link-btn" on:click=move |_| ctx.navigate(View::Login)>
                "Return to Home"
            </button>
        </div>
    }
}
