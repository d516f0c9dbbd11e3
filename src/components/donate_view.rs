//! Donate View
//!
//! Fundraising campaigns with an inline donation form. Donations only show
//! a confirmation; campaign totals are static.

use leptos::prelude::*;

use crate::components::{input_value, Badge, PageHeader, ProgressBar};
use crate::context::use_app_context;
use crate::format::{format_usd, parse_amount, percent};
use crate::models::Campaign;
use crate::notify;
use crate::seed;

/// Headline figures (value, caption)
const IMPACT: &[(&str, &str)] = &[
    ("$892K", "Total Raised This Year"),
    ("1,247", "Active Contributors"),
    ("89%", "Average Goal Achievement"),
];

#[component]
fn DonationForm(campaign: Campaign, selected: RwSignal<Option<u32>>) -> impl IntoView {
    let ctx = use_app_context();
    let amount = RwSignal::new(String::new());

    let donate = move |_| {
        let parsed = parse_amount(&amount.get_untracked());
        log::info!("[DONATE] {:?} to campaign {}", parsed, campaign.id);
        ctx.notify(notify::donation(&campaign, parsed));
        amount.set(String::new());
        selected.set(None);
    };

    view! {
        <div class="donation-form">
            <div class="preset-grid">
                {ctx.config.donation_presets.iter().map(|&preset| view! {
                    <button class="btn outline small" on:click=move |_| amount.set(preset.to_string())>
                        {format!("${}", preset)}
                    </button>
                }).collect_view()}
            </div>
            <input
                type="text"
                placeholder="Custom amount"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(input_value(&ev))
            />
            <div class="form-row">
                <button class="btn primary grow" on:click=donate>
                    {move || {
                        let typed = amount.get();
                        format!("Donate ${}", if typed.is_empty() { "0".to_string() } else { typed })
                    }}
                </button>
                <button class="btn outline" on:click=move |_| selected.set(None)>"Cancel"</button>
            </div>
        </div>
    }
}

#[component]
fn CampaignCard(campaign: Campaign, selected: RwSignal<Option<u32>>) -> impl IntoView {
    let id = campaign.id;
    let progress = percent(campaign.raised, campaign.goal);
    let form_campaign = campaign.clone();

    view! {
        <article class="card campaign-card">
            <h3>{campaign.title.clone()}</h3>
            <Badge label=campaign.category.as_str() tone=campaign.category.tone() />
            <p class="muted">{campaign.description.clone()}</p>
            <div class="campaign-progress">
                <div class="split small">
                    <span class="muted">"Progress"</span>
                    <span>{format!("{}%", progress.round())}</span>
                </div>
                <ProgressBar percent=progress />
                <div class="split small">
                    <strong>{format_usd(campaign.raised)}</strong>
                    <span class="muted">{format!("of {}", format_usd(campaign.goal))}</span>
                </div>
            </div>
            <div class="split small muted">
                <span>{format!("👥 {} contributors", campaign.contributors)}</span>
                <span>{format!("Ends: {}", campaign.end_date)}</span>
            </div>
            <Show
                when=move || selected.get() == Some(id)
                fallback=move || view! {
                    <button class="btn primary wide" on:click=move |_| selected.set(Some(id))>
                        "Donate Now"
                    </button>
                }
            >
                <DonationForm campaign=form_campaign.clone() selected=selected />
            </Show>
        </article>
    }
}

#[component]
pub fn DonateView() -> impl IntoView {
    let campaigns = seed::campaigns().unwrap_or_else(|err| {
        log::error!("[DONATE] failed to load campaigns: {}", err);
        Vec::new()
    });
    let selected = RwSignal::new(None::<u32>);

    view! {
        <section class="view donate-view">
            <PageHeader title="Support Our Causes" subtitle="Make a difference in your alma mater's future" />
            <div class="stat-grid three">
                {IMPACT.iter().map(|(value, caption)| view! {
                    <div class="card stat-card centered">
                        <p class="stat-value">{*value}</p>
                        <p class="muted small">{*caption}</p>
                    </div>
                }).collect_view()}
            </div>
            <h2>"Active Campaigns"</h2>
            <div class="campaign-grid">
                {campaigns.into_iter().map(|campaign| view! {
                    <CampaignCard campaign=campaign selected=selected />
                }).collect_view()}
            </div>
        </section>
    }
}
