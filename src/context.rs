//! Widget Context
//!
//! Reactive state behind the page, provided via the Leptos Context API. It is
//! the browser [`Surface`]: the orchestrator writes store fields, the
//! components read them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::DisplayItem;
use crate::surface::{self, Surface};

/// One rendered card
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Unique across batches: (batch, index)
    pub key: (u64, usize),
    pub item: DisplayItem,
    pub revealed: bool,
}

/// Visible widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    pub trigger_enabled: bool,
    /// Native validity hint for the count input, empty when valid
    pub validity: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Connectivity notice
    pub notice: Option<String>,
    pub cards: Vec<Card>,
    /// Bumped on every clear so card keys never repeat
    pub batch: u64,
}

pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

/// Handle the orchestrator renders through
#[derive(Clone, Copy)]
pub struct WidgetContext {
    store: WidgetStore,
}

impl WidgetContext {
    pub fn new(store: WidgetStore) -> Self {
        Self { store }
    }
}

impl Surface for WidgetContext {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.store.trigger_enabled().set(enabled);
    }

    fn set_validity_message(&self, message: &str) {
        self.store.validity().set(message.to_string());
    }

    fn set_loading(&self, visible: bool) {
        self.store.loading().set(visible);
    }

    fn show_error(&self, message: &str) {
        self.store.error().set(Some(message.to_string()));
    }

    fn hide_error(&self) {
        self.store.error().set(None);
    }

    fn set_notice(&self, message: Option<&str>) {
        self.store.notice().set(message.map(str::to_string));
    }

    fn clear_cards(&self) {
        self.store.cards().write().clear();
        self.store.batch().update(|b| *b += 1);
    }

    fn append_cards(&self, cards: Vec<DisplayItem>) {
        let batch = self.store.batch().get_untracked();
        let cards_field = self.store.cards();
        let mut rendered = cards_field.write();
        let start = rendered.len();
        rendered.extend(cards.into_iter().enumerate().map(|(i, item)| Card {
            key: (batch, start + i),
            item,
            revealed: false,
        }));
    }

    fn reveal_card(&self, index: usize) {
        if let Some(card) = self.store.cards().write().get_mut(index) {
            card.revealed = true;
        }
    }

    fn escape_markup(&self, text: &str) -> String {
        surface::dom_escape(text).unwrap_or_else(|| {
            log::error!("no document available to escape markup; dropping text");
            String::new()
        })
    }
}
