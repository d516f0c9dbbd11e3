//! Toaster Component
//!
//! Stack of pending toasts; click one to dismiss it early.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster">
            <For
                each=move || store_toasts(&ctx.store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| ctx.dismiss(id)>
                            <strong class="toast-title">{toast.notice.title}</strong>
                            <p class="toast-body">{toast.notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
