//! Post List Components
//!
//! Renders the card batch. Card fields are already escaped markup, so they
//! go in through `inner_html` rather than as text.

use leptos::prelude::*;

use crate::config::Messages;
use crate::context::{use_widget_store, WidgetStateStoreFields};
use crate::models::DisplayItem;

#[component]
pub fn PostList() -> impl IntoView {
    let store = use_widget_store();

    view! {
        <div id="postsContainer" class="posts-container">
            <For
                each=move || store.cards().get().into_iter().enumerate()
                key=|(_, card)| card.key
                children=move |(index, card)| view! { <PostCard index=index item=card.item /> }
            />
        </div>
    }
}

/// Single card; fades in once the store marks it revealed
#[component]
pub fn PostCard(index: usize, item: DisplayItem) -> impl IntoView {
    let store = use_widget_store();
    let messages = expect_context::<Messages>();
    let revealed = move || {
        store
            .cards()
            .read()
            .get(index)
            .map(|card| card.revealed)
            .unwrap_or(false)
    };

    view! {
        <div class="post-card" class:fade-in=revealed>
            <div class="post-header">
                <div class="post-id">"#"<span inner_html=item.id></span></div>
                <div class="user-id">
                    {messages.user_label.clone()}": "<span inner_html=item.user_id></span>
                </div>
            </div>
            <h3 class="post-title" inner_html=item.title></h3>
            <p class="post-body" inner_html=item.body></p>
        </div>
    }
}
