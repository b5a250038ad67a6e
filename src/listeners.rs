//! Page Listeners
//!
//! Window-level events that reach the orchestrator outside the form:
//! connectivity changes and unhandled promise rejections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, PromiseRejectionEvent, Window};

use crate::api::js_error_text;
use crate::WidgetOrchestrator;

/// Register for the lifetime of the page
pub fn install(orchestrator: &WidgetOrchestrator) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; page listeners not installed");
        return;
    };

    let online = orchestrator.clone();
    listen(&window, "online", move |_| online.connectivity_changed(true));

    let offline = orchestrator.clone();
    listen(&window, "offline", move |_| offline.connectivity_changed(false));

    let rejected = orchestrator.clone();
    listen(&window, "unhandledrejection", move |ev: Event| {
        let reason = ev
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|ev| js_error_text(&ev.reason()))
            .unwrap_or_else(|| "unknown rejection".to_string());
        rejected.unexpected_error(&reason);
    });
}

fn listen<F>(window: &Window, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if window
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not listen for '{}'", event);
    }
    cb.forget();
}
