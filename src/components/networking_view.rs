//! Networking View
//!
//! Alumni directory with search and a connect toggle.

use leptos::prelude::*;
use toggle_list::{Record, RecordId};

use crate::components::{Avatar, Badge, PageHeader, SearchInput};
use crate::list_state::ListState;
use crate::models::Member;
use crate::seed;

#[component]
fn MemberCard(member: Record<Member>, on_connect: Callback<RecordId>) -> impl IntoView {
    let id = member.id();
    let connected = member.is_active();
    let Member { name, company, position, location, year } = member.payload().clone();

    view! {
        <article class="card member-card">
            <div class="member-head">
                <Avatar name=name.clone() large=true />
                <div>
                    <h3>{name}</h3>
                    <p class="muted">{position}</p>
                    <Badge label=format!("Class of {}", year) tone="gray" />
                </div>
            </div>
            <div class="member-facts muted small">
                <span>"🏢 " {company}</span>
                <span>"📍 " {location}</span>
            </div>
            <button
                class=if connected { "btn secondary small" } else { "btn primary small" }
                on:click=move |_| on_connect.run(id)
            >
                {if connected { "Connected" } else { "Connect" }}
            </button>
        </article>
    }
}

#[component]
pub fn NetworkingView() -> impl IntoView {
    let members = ListState::new(seed::member_source(), "NETWORK");
    let query = RwSignal::new(String::new());

    let on_connect = Callback::new(move |id: RecordId| match members.toggle(id) {
        Ok(Some(member)) => log::info!(
            "[NETWORK] {} connected={}",
            member.payload().name,
            member.is_active()
        ),
        Ok(None) => log::debug!("[NETWORK] connect ignored, no member {}", id),
        Err(err) => log::warn!("[NETWORK] connect failed: {}", err),
    });

    view! {
        <section class="view networking-view">
            <PageHeader title="Networking" subtitle="Find and connect with fellow alumni" />
            <div class="toolbar">
                <SearchInput query=query placeholder="Search alumni..." />
                <span class="muted small">{move || format!("{} connections", members.active_count())}</span>
            </div>
            <div class="member-grid">
                <For
                    each=move || members.filtered(&query.get())
                    key=|member| (member.id(), member.is_active())
                    children=move |member| view! { <MemberCard member=member on_connect=on_connect /> }
                />
            </div>
        </section>
    }
}
