//! Status Panel Component
//!
//! Loading indicator, error region and the connectivity notice.

use leptos::prelude::*;

use crate::config::Messages;
use crate::context::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn StatusPanel() -> impl IntoView {
    let store = use_widget_store();
    let messages = expect_context::<Messages>();

    view! {
        <div
            class="offline-notice"
            class:hidden=move || store.notice().get().is_none()
            role="status"
        >
            {move || store.notice().get().unwrap_or_default()}
        </div>

        <div class="loading" class:hidden=move || !store.loading().get()>
            <div class="spinner"></div>
            <span>{messages.loading.clone()}</span>
        </div>

        <div
            id="error"
            class="error"
            class:hidden=move || store.error().get().is_none()
            role="alert"
        >
            {move || store.error().get().unwrap_or_default()}
        </div>
    }
}
