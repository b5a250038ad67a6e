//! Fetch Orchestrator
//!
//! Wires user actions to validator → fetcher → presenter and owns the UI
//! state machine:
//!
//! ```text
//! Idle ──trigger (valid)──▶ Loading ──ok──▶ Loaded
//!                              └──err/empty──▶ Error ──dismiss──▶ Idle
//! ```
//!
//! At most one fetch is in flight; a trigger while `Loading` is dropped.
//! Error dismissal and card reveals are deferred callbacks stamped with a
//! generation, so a newer error or render turns older ones into no-ops.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::{self, Transport};
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::models::UiState;
use crate::presenter;
use crate::surface::Surface;
use crate::timers::Scheduler;
use crate::validator::{self, Validation};

struct Inner<S, T, C> {
    surface: S,
    transport: T,
    scheduler: C,
    config: WidgetConfig,
    input: RefCell<String>,
    state: RefCell<UiState>,
    error_generation: Cell<u64>,
    render_generation: Cell<u64>,
}

/// Cheap to clone; clones share state
pub struct Orchestrator<S, T, C> {
    inner: Rc<Inner<S, T, C>>,
}

impl<S, T, C> Clone for Orchestrator<S, T, C> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, T, C> Orchestrator<S, T, C>
where
    S: Surface,
    T: Transport + 'static,
    C: Scheduler,
{
    /// Build and run the initial validation of `config.initial_count`
    pub fn new(surface: S, transport: T, scheduler: C, config: WidgetConfig) -> Self {
        let initial = config.initial_count.clone();
        let orchestrator = Self {
            inner: Rc::new(Inner {
                surface,
                transport,
                scheduler,
                config,
                input: RefCell::new(String::new()),
                state: RefCell::new(UiState::Idle),
                error_generation: Cell::new(0),
                render_generation: Cell::new(0),
            }),
        };
        orchestrator.input_changed(&initial);
        orchestrator
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    pub fn state(&self) -> UiState {
        self.inner.state.borrow().clone()
    }

    pub fn input(&self) -> String {
        self.inner.input.borrow().clone()
    }

    /// Store the new input text and refresh trigger + validity hint
    pub fn input_changed(&self, text: &str) -> Validation {
        *self.inner.input.borrow_mut() = text.to_string();
        self.refresh_validity()
    }

    /// `Enter` triggers a fetch; other keys are ignored
    pub async fn key_pressed(&self, key: &str) {
        if key == "Enter" {
            self.trigger().await;
        }
    }

    /// Run one fetch cycle if the input is valid and nothing is in flight
    pub async fn trigger(&self) {
        let inner = &self.inner;
        if inner.state.borrow().is_loading() {
            log::debug!("trigger ignored: a fetch is already in flight");
            return;
        }
        let count = match validator::parse_count(&self.input()) {
            Ok(count) => count,
            Err(reason) => {
                self.fail(reason.into());
                return;
            }
        };

        self.enter_loading();
        let result = api::fetch_items(&inner.transport, &inner.config, count).await;
        let outcome = result.and_then(|items| {
            presenter::render(&inner.surface, &inner.config.messages, Some(items.as_slice()))
        });

        inner.surface.set_loading(false);
        match outcome {
            Ok(cards) => {
                let shown = cards.len();
                *inner.state.borrow_mut() = UiState::Loaded(cards);
                let generation = inner.render_generation.get();
                let this = self.clone();
                presenter::stagger_reveal(&inner.surface, &inner.scheduler, &inner.config, shown, move || {
                    this.inner.render_generation.get() == generation
                });
            }
            Err(err) => {
                *inner.state.borrow_mut() = UiState::Idle;
                self.fail(err);
            }
        }
        self.refresh_validity();
    }

    /// Browser `online` / `offline`
    pub fn connectivity_changed(&self, online: bool) {
        if online {
            log::info!("connection restored");
            self.inner.surface.set_notice(None);
        } else {
            log::warn!("connection lost");
            self.inner.surface.set_notice(Some(self.inner.config.messages.offline.as_str()));
        }
    }

    /// Top-level safety net for rejections nothing else handled
    pub fn unexpected_error(&self, reason: &str) {
        self.fail(WidgetError::Unexpected(reason.to_string()));
    }

    fn enter_loading(&self) {
        let inner = &self.inner;
        *inner.state.borrow_mut() = UiState::Loading;
        inner.surface.set_trigger_enabled(false);
        inner.surface.set_loading(true);
        self.dismiss_error();
        inner.render_generation.set(inner.render_generation.get() + 1);
        inner.surface.clear_cards();
    }

    fn refresh_validity(&self) -> Validation {
        let inner = &self.inner;
        let validation = validator::validate(&inner.input.borrow());
        let hint = validation
            .reason
            .map(|reason| reason.hint(&inner.config.messages))
            .unwrap_or("");
        inner.surface.set_validity_message(hint);
        inner
            .surface
            .set_trigger_enabled(validation.is_valid() && !inner.state.borrow().is_loading());
        validation
    }

    /// Log, show the message and schedule its dismissal
    fn fail(&self, err: WidgetError) {
        let inner = &self.inner;
        log::error!("{}", err);
        let message = err.user_message(&inner.config.messages).to_string();
        inner.surface.show_error(&message);
        if !inner.state.borrow().is_loading() {
            *inner.state.borrow_mut() = UiState::Error(message);
        }

        let generation = inner.error_generation.get() + 1;
        inner.error_generation.set(generation);
        let this = self.clone();
        inner.scheduler.defer(
            inner.config.error_dismiss_delay(),
            Box::new(move || {
                if this.inner.error_generation.get() == generation {
                    this.dismiss_error();
                }
            }),
        );
    }

    fn dismiss_error(&self) {
        let inner = &self.inner;
        inner.error_generation.set(inner.error_generation.get() + 1);
        inner.surface.hide_error();
        let mut state = inner.state.borrow_mut();
        if matches!(*state, UiState::Error(_)) {
            *state = UiState::Idle;
        }
    }
}
