//! Login View
//!
//! Sign-in / sign-up form. There is no authentication: submitting goes
//! straight to the dashboard.

use leptos::prelude::*;

use crate::components::input_value;
use crate::context::use_app_context;
use crate::route::View;

/// Hero figures (value, caption)
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("12K+", "Alumni"),
    ("50K+", "Connections"),
    ("500+", "Events"),
];

#[component]
fn TextInput(
    #[prop(into)] kind: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            required=true
            prop:value=move || value.get()
            on:input=move |ev| value.set(input_value(&ev))
        />
    }
}

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (show_password, set_show_password) = signal(false);
    let (sign_up, set_sign_up) = signal(false);

    let toggle_mode = move |_| {
        set_sign_up.update(|v| *v = !*v);
        for field in [name, email, password, confirm_password] {
            field.set(String::new());
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mode = if sign_up.get_untracked() { "sign up" } else { "sign in" };
        log::info!("[APP] {} submitted", mode);
        ctx.navigate(View::Dashboard);
    };

    view! {
        <div class="login-layout">
            <div class="login-hero">
                <h1><span class="accent">"Connect"</span><br/>"Beyond Graduation"</h1>
                <p class="muted">
                    "Where memories meet opportunities. Join thousands of alumni building lasting connections."
                </p>
                <div class="hero-stats">
                    {HIGHLIGHTS.iter().map(|(value, caption)| view! {
                        <div class="hero-stat">
                            <strong>{*value}</strong>
                            <span class="muted small">{*caption}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="card login-card">
                <h2>"Alumni Network"</h2>
                <p class="muted">{move || if sign_up.get() { "Join the community" } else { "Welcome back" }}</p>

                <form class="login-form" on:submit=submit>
                    <Show when=move || sign_up.get()>
                        <TextInput kind="text" placeholder="Full Name" value=name />
                    </Show>
                    <TextInput kind="email" placeholder="Email Address" value=email />
                    <div class="password-row">
                        {move || view! {
                            <TextInput
                                kind=if show_password.get() { "text" } else { "password" }
                                placeholder="Password"
                                value=password
                            />
                        }}
                        <button
                            type="button"
                            class="icon-btn"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    <Show when=move || sign_up.get()>
                        <TextInput kind="password" placeholder="Confirm Password" value=confirm_password />
                    </Show>
                    <button type="submit" class="btn primary wide">
                        {move || if sign_up.get() { "Create Account" } else { "Sign In" }}
                        " →"
                    </button>
                </form>

                <p class="muted small centered">
                    {move || if sign_up.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <button type="button" class="link-btn" on:click=toggle_mode>
                        {move || if sign_up.get() { "Sign in" } else { "Sign up" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
