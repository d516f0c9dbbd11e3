//! Profile View
//!
//! Profile card and details. Editing works on a draft copy that replaces
//! the saved profile on Save and is dropped on Cancel.

use leptos::prelude::*;

use crate::components::{input_value, Avatar, Badge, PageHeader};
use crate::context::use_app_context;
use crate::models::{Profile, ProfileField};
use crate::store::{store_profile, store_save_profile};

/// One labelled field, editable while `editing` is set
#[component]
fn FieldRow(
    field: ProfileField,
    draft: RwSignal<Profile>,
    editing: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="field-row">
            <label class="field-label">{field.label()}</label>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <p class="muted">{move || draft.with(|p| field.get(p).to_string())}</p>
                }
            >
                <input
                    type="text"
                    prop:value=move || draft.with(|p| field.get(p).to_string())
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        draft.update(|p| field.set(p, value));
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn FieldSection(
    #[prop(into)] title: String,
    fields: &'static [ProfileField],
    draft: RwSignal<Profile>,
    editing: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <div class="field-grid">
                {fields.iter().map(|&field| view! {
                    <FieldRow field=field draft=draft editing=editing />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);
    let draft = RwSignal::new(store_profile(&ctx.store));

    let start_edit = move |_| {
        draft.set(store_profile(&ctx.store));
        set_editing.set(true);
    };

    let save = move |_| {
        store_save_profile(&ctx.store, draft.get_untracked());
        set_editing.set(false);
        log::info!("[PROFILE] saved");
    };

    let cancel = move |_| {
        draft.set(store_profile(&ctx.store));
        set_editing.set(false);
    };

    let saved = move || store_profile(&ctx.store);

    view! {
        <section class="view profile-view">
            <div class="view-title-row">
                <PageHeader title="Profile" subtitle="Manage your profile information" />
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button class="btn primary" on:click=start_edit>"✎ Edit Profile"</button>
                    }
                >
                    <div class="form-row">
                        <button class="btn primary" on:click=save>"Save Changes"</button>
                        <button class="btn outline" on:click=cancel>"Cancel"</button>
                    </div>
                </Show>
            </div>

            <div class="profile-layout">
                <div class="card profile-card centered">
                    {move || view! { <Avatar name=saved().name large=true /> }}
                    <h3>{move || saved().name}</h3>
                    <p class="muted">{move || saved().position}</p>
                    <p class="muted small">{move || saved().company}</p>
                    {move || view! { <Badge label=format!("Class of {}", saved().graduation) tone="gray" /> }}
                    <p class="muted small bio">{move || saved().bio}</p>
                </div>

                <div class="profile-details">
                    <FieldSection title="Contact Information" fields=&ProfileField::CONTACT draft=draft editing=editing />
                    <FieldSection title="Professional Information" fields=&ProfileField::PROFESSIONAL draft=draft editing=editing />

                    <div class="card">
                        <h3>"Skills"</h3>
                        <div class="badge-row">
                            {move || saved().skills.into_iter().map(|skill| view! {
                                <Badge label=skill tone="blue" />
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Interests"</h3>
                        <div class="badge-row">
                            {move || saved().interests.into_iter().map(|interest| view! {
                                <Badge label=interest tone="outline" />
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
