//! Events View
//!
//! Event cards with attendance bars and registration.

use leptos::prelude::*;
use toggle_list::{Record, RecordId, StoreError};

use crate::components::{Badge, PageHeader, ProgressBar};
use crate::context::use_app_context;
use crate::format::percent;
use crate::list_state::ListState;
use crate::models::Event;
use crate::notify;
use crate::seed;

/// Label for the registration button
fn register_label(registered: bool, full: bool) -> &'static str {
    match (registered, full) {
        (true, _) => "Registered",
        (false, true) => "Event Full",
        (false, false) => "Register",
    }
}

#[component]
fn EventCard(event: Record<Event>, on_register: Callback<RecordId>) -> impl IntoView {
    let id = event.id();
    let registered = event.is_active();
    let full = event.is_full();
    let attendees = event.counter().unwrap_or_default();
    let Event { title, date, time, location, kind, max_attendees, description } = event.payload().clone();
    let filled = percent(attendees as u64, max_attendees as u64);
    let locked = !registered && full;

    view! {
        <article class="card event-card">
            <div class="event-head">
                <h3>{title}</h3>
                <Badge label=kind.as_str() tone=kind.tone() />
            </div>
            <div class="event-facts muted small">
                <span>"📅 " {date}</span>
                <span>"🕒 " {time}</span>
                <span>"📍 " {location}</span>
            </div>
            <p class="muted">{description}</p>
            <div class="event-attendance">
                <span class="small muted">{format!("{}/{} registered", attendees, max_attendees)}</span>
                <ProgressBar percent=filled />
            </div>
            <button
                class=if registered { "btn secondary wide" } else { "btn primary wide" }
                disabled=locked
                on:click=move |_| on_register.run(id)
            >
                {register_label(registered, full)}
            </button>
        </article>
    }
}

#[component]
pub fn EventsView() -> impl IntoView {
    let ctx = use_app_context();
    let events = ListState::new(seed::event_source(), "EVENTS");

    let on_register = Callback::new(move |id: RecordId| match events.toggle(id) {
        Ok(Some(event)) => {
            log::info!(
                "[EVENTS] event {} registered={} attendees={:?}",
                id,
                event.is_active(),
                event.counter()
            );
            ctx.notify(notify::event_registration(&event));
        }
        Ok(None) => log::debug!("[EVENTS] register ignored, no event {}", id),
        Err(StoreError::CapacityReached { .. }) => {
            log::warn!("[EVENTS] event {} is full", id);
            if let Some(event) = events.get(id) {
                ctx.notify(notify::event_full(event.payload()));
            }
        }
        Err(err) => log::warn!("[EVENTS] register failed: {}", err),
    });

    view! {
        <section class="view events-view">
            <PageHeader title="Events" subtitle="Discover and join alumni events" />
            <div class="event-grid">
                <For
                    each=move || events.records()
                    key=|event| (event.id(), event.is_active(), event.counter())
                    children=move |event| view! { <EventCard event=event on_register=on_register /> }
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_label() {
        assert_eq!(register_label(false, false), "Register");
        assert_eq!(register_label(false, true), "Event Full");
        assert_eq!(register_label(true, true), "Registered");
        assert_eq!(register_label(true, false), "Registered");
    }
}
