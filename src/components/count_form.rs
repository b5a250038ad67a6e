//! Count Form Component
//!
//! Number input plus the fetch trigger. Enter in the input triggers too.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::Messages;
use crate::context::{use_widget_store, WidgetStateStoreFields};
use crate::models::RequestedCount;
use crate::WidgetOrchestrator;

#[component]
pub fn CountForm(orchestrator: WidgetOrchestrator) -> impl IntoView {
    let store = use_widget_store();
    let messages = expect_context::<Messages>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let initial = orchestrator.input();

    // Keep the native validity hint in sync once the input is mounted
    Effect::new(move |_| {
        let hint = store.validity().get();
        if let Some(input) = input_ref.get() {
            input.set_custom_validity(&hint);
        }
    });

    // Rc-based, so keep it in local storage rather than capturing it directly
    let orchestrator = StoredValue::new_local(orchestrator);

    let on_keypress = move |ev: web_sys::KeyboardEvent| {
        let o = orchestrator.get_value();
        let key = ev.key();
        spawn_local(async move { o.key_pressed(&key).await });
    };

    let on_click = move |_| {
        let o = orchestrator.get_value();
        spawn_local(async move { o.trigger().await });
    };

    view! {
        <div class="controls">
            <label for="postCount">{messages.input_label.clone()}</label>
            <input
                id="postCount"
                type="number"
                min=RequestedCount::MIN.to_string()
                max=RequestedCount::MAX.to_string()
                node_ref=input_ref
                prop:value=initial
                on:input=move |ev| {
                    orchestrator.with_value(|o| {
                        o.input_changed(&event_target_value(&ev));
                    });
                }
                on:keypress=on_keypress
            />
            <button
                id="fetchBtn"
                prop:disabled=move || !store.trigger_enabled().get()
                on:click=on_click
            >
                {messages.fetch_button.clone()}
            </button>
        </div>
    }
}
