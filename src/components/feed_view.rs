//! Feed View
//!
//! Network posts with a like toggle per post.

use leptos::prelude::*;
use toggle_list::{Record, RecordId};

use crate::components::{Avatar, Badge, PageHeader};
use crate::context::use_app_context;
use crate::list_state::ListState;
use crate::models::Post;
use crate::notify;
use crate::seed;

#[component]
fn PostCard(post: Record<Post>, on_like: Callback<RecordId>) -> impl IntoView {
    let id = post.id();
    let liked = post.is_active();
    let likes = post.counter().unwrap_or_default();
    let Post { author, time, content, kind, comments } = post.payload().clone();

    view! {
        <article class="card post-card">
            <div class="post-head">
                <Avatar name=author.clone() />
                <div class="post-meta">
                    <div class="post-author-row">
                        <h3>{author}</h3>
                        <Badge label=kind.as_str() tone=kind.tone() />
                    </div>
                    <p class="muted small">{time}</p>
                </div>
            </div>
            <p class="post-content">{content}</p>
            <div class="post-actions">
                <button
                    class=if liked { "action-btn liked" } else { "action-btn" }
                    on:click=move |_| on_like.run(id)
                >
                    {if liked { "♥" } else { "♡" }} " " {likes}
                </button>
                <span class="action-btn static">"💬 " {comments}</span>
            </div>
        </article>
    }
}

#[component]
pub fn FeedView() -> impl IntoView {
    let ctx = use_app_context();
    let posts = ListState::new(seed::feed_source(), "FEED");

    let on_like = Callback::new(move |id: RecordId| match posts.toggle(id) {
        Ok(Some(post)) => {
            log::debug!("[FEED] post {} liked={} likes={:?}", id, post.is_active(), post.counter());
            if let Some(notice) = notify::post_liked(&post) {
                ctx.notify(notice);
            }
        }
        Ok(None) => log::debug!("[FEED] like ignored, no post {}", id),
        Err(err) => log::warn!("[FEED] like failed: {}", err),
    });

    view! {
        <section class="view feed-view">
            <PageHeader title="Feed" subtitle="Stay updated with your network" />
            <div class="post-list">
                <For
                    each=move || posts.records()
                    key=|post| (post.id(), post.is_active(), post.counter())
                    children=move |post| view! { <PostCard post=post on_like=on_like /> }
                />
            </div>
        </section>
    }
}
