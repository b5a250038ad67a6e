//! Post Feed App
//!
//! Root component: builds the store and orchestrator once and lays out the
//! form, status panel and card list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::BrowserTransport;
use crate::components::{CountForm, PostList, StatusPanel};
use crate::config::WidgetConfig;
use crate::context::{WidgetContext, WidgetState};
use crate::listeners;
use crate::orchestrator::Orchestrator;
use crate::timers::TimeoutScheduler;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let title = config.messages.title.clone();

    // Provide context to all children
    let store = Store::new(WidgetState::default());
    provide_context(store);
    provide_context(config.messages.clone());

    let orchestrator = Orchestrator::new(WidgetContext::new(store), BrowserTransport, TimeoutScheduler, config);
    listeners::install(&orchestrator);
    log::info!("post feed ready");

    view! {
        <div class="container">
            <h1>{title}</h1>
            <CountForm orchestrator=orchestrator />
            <StatusPanel />
            <PostList />
        </div>
    }
}
