//! Dashboard View
//!
//! Headline stats, recent activity and the next few events.

use leptos::prelude::*;
use toggle_list::RecordSource;

use crate::components::{Avatar, PageHeader};
use crate::context::use_app_context;
use crate::models::Dashboard;
use crate::route::View;
use crate::seed;
use crate::store::store_profile;

/// How many events the dashboard lists
const UPCOMING_LIMIT: usize = 3;

#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_app_context();
    let first_name = store_profile(&ctx.store)
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let Dashboard { stats, activity } = seed::dashboard().unwrap_or_else(|err| {
        log::error!("[DASHBOARD] failed to load dashboard: {}", err);
        Dashboard { stats: Vec::new(), activity: Vec::new() }
    });

    let upcoming: Vec<_> = seed::event_source()
        .and_then(|source| source.load())
        .map(|events| events.into_records().into_iter().take(UPCOMING_LIMIT).collect())
        .unwrap_or_else(|err| {
            log::error!("[DASHBOARD] failed to load events: {}", err);
            Vec::new()
        });

    view! {
        <section class="view dashboard-view">
            <PageHeader
                title=format!("Welcome back, {}!", first_name)
                subtitle="Here's what's happening in your alumni network"
            />

            <div class="stat-grid">
                {stats.into_iter().map(|stat| view! {
                    <div class="card stat-card">
                        <p class="muted small">{stat.title}</p>
                        <p class="stat-value">{stat.value}</p>
                        <p class="trend small">{format!("{} from last month", stat.trend)}</p>
                    </div>
                }).collect_view()}
            </div>

            <div class="dashboard-columns">
                <div class="card">
                    <h3>"Recent Activity"</h3>
                    <ul class="activity-list">
                        {activity.into_iter().map(|item| view! {
                            <li class="activity-item">
                                <Avatar name=item.user.clone() />
                                <div>
                                    <p><strong>{item.user}</strong> " " {item.action}</p>
                                    <p class="muted small">{item.time}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button class="btn outline wide" on:click=move |_| ctx.navigate(View::Feed)>
                        "View All Activity"
                    </button>
                </div>

                <div class="card">
                    <h3>"Upcoming Events"</h3>
                    <ul class="event-summary-list">
                        {upcoming.into_iter().map(|event| {
                            let attending = event.counter().unwrap_or_default();
                            let payload = event.payload().clone();
                            view! {
                                <li class="event-summary">
                                    <p><strong>{payload.title}</strong></p>
                                    <p class="muted small">{payload.date}</p>
                                    <p class="small">{format!("{} attending", attending)}</p>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                    <button class="btn outline wide" on:click=move |_| ctx.navigate(View::Events)>
                        "View All Events"
                    </button>
                </div>
            </div>
        </section>
    }
}
