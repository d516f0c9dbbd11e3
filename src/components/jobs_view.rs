//! Jobs View
//!
//! Searchable job board. Applying is one-way in the UI: the button locks
//! once the listing is marked applied.

use leptos::prelude::*;
use toggle_list::{Record, RecordId};

use crate::components::{Badge, PageHeader, SearchInput};
use crate::list_state::ListState;
use crate::models::Job;
use crate::seed;

#[component]
fn JobCard(job: Record<Job>, on_apply: Callback<RecordId>) -> impl IntoView {
    let id = job.id();
    let applied = job.is_active();
    let Job { title, company, location, kind, salary, posted, description } = job.payload().clone();

    view! {
        <article class="card job-card">
            <div class="job-head">
                <div>
                    <h3>{title}</h3>
                    <div class="job-facts muted small">
                        <span>"🏢 " {company}</span>
                        <span>"📍 " {location}</span>
                        <span>"🕒 " {posted}</span>
                    </div>
                </div>
                <div class="job-side">
                    <Badge label=kind.label() tone=kind.tone() />
                    <span class="salary">{salary}</span>
                </div>
            </div>
            <p class="muted">{description}</p>
            <div class="job-foot">
                <span class="muted small">"Posted by alumni network"</span>
                <button
                    class=if applied { "btn secondary" } else { "btn primary" }
                    disabled=applied
                    on:click=move |_| on_apply.run(id)
                >
                    {if applied { "Applied" } else { "Apply Now" }}
                </button>
            </div>
        </article>
    }
}

#[component]
pub fn JobsView() -> impl IntoView {
    let jobs = ListState::new(seed::job_source(), "JOBS");
    let query = RwSignal::new(String::new());

    let on_apply = Callback::new(move |id: RecordId| match jobs.toggle(id) {
        Ok(Some(job)) => log::info!("[JOBS] applied={} to job {}", job.is_active(), id),
        Ok(None) => log::debug!("[JOBS] apply ignored, no job {}", id),
        Err(err) => log::warn!("[JOBS] apply failed: {}", err),
    });

    view! {
        <section class="view jobs-view">
            <PageHeader title="Job Board" subtitle="Opportunities shared by your alumni network" />
            <SearchInput query=query placeholder="Search jobs..." />
            <div class="job-list">
                <For
                    each=move || jobs.filtered(&query.get())
                    key=|job| (job.id(), job.is_active())
                    children=move |job| view! { <JobCard job=job on_apply=on_apply /> }
                />
            </div>
            <Show when=move || jobs.filtered(&query.get()).is_empty()>
                <p class="empty muted">"No jobs match your search."</p>
            </Show>
        </section>
    }
}
