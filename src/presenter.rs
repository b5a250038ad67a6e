//! Item Presenter
//!
//! Turns untrusted [`RawItem`]s into [`DisplayItem`]s and hands them to the
//! surface as one batch.

use serde_json::Value;

use crate::config::{Messages, WidgetConfig};
use crate::error::WidgetError;
use crate::models::{DisplayItem, RawItem};
use crate::surface::Surface;
use crate::timers::Scheduler;

/// Render `items` in order. Empty or absent input is [`WidgetError::EmptyResult`]
/// and leaves the surface untouched.
pub fn render<S: Surface>(
    surface: &S,
    messages: &Messages,
    items: Option<&[RawItem]>,
) -> Result<Vec<DisplayItem>, WidgetError> {
    let items = match items {
        Some(items) if !items.is_empty() => items,
        _ => return Err(WidgetError::EmptyResult),
    };

    let cards: Vec<DisplayItem> = items.iter().map(|raw| sanitize(surface, messages, raw)).collect();
    surface.append_cards(cards.clone());
    Ok(cards)
}

/// Fill placeholders and escape every text field through the surface
pub fn sanitize<S: Surface>(surface: &S, messages: &Messages, raw: &RawItem) -> DisplayItem {
    DisplayItem {
        id: field_markup(surface, &raw.id, &messages.missing_id),
        user_id: field_markup(surface, &raw.user_id, &messages.missing_id),
        title: field_markup(surface, &raw.title, &messages.no_title),
        body: field_markup(surface, &raw.body, &messages.no_body),
    }
}

fn field_markup<S: Surface>(surface: &S, value: &Option<Value>, placeholder: &str) -> String {
    match value.as_ref().and_then(display_text) {
        Some(text) => surface.escape_markup(&text),
        None => surface.escape_markup(placeholder),
    }
}

/// Text for a present value; `None` for null, false, zero and ""
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => None,
    }
}

/// Fade cards in one after another. `is_current` is checked when each timer
/// fires so a newer render cancels the rest of an older cascade.
pub fn stagger_reveal<S, C, F>(surface: &S, scheduler: &C, config: &WidgetConfig, count: usize, is_current: F)
where
    S: Surface,
    C: Scheduler,
    F: Fn() -> bool + Clone + 'static,
{
    for index in 0..count {
        let surface = surface.clone();
        let is_current = is_current.clone();
        scheduler.defer(
            config.reveal_delay(index),
            Box::new(move || {
                if is_current() {
                    surface.reveal_card(index);
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingSurface};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn raw(value: Value) -> RawItem {
        RawItem::from_value(value)
    }

    #[test]
    fn test_title_is_escaped_and_missing_body_uses_placeholder() {
        let surface = RecordingSurface::new();
        let messages = Messages::default();
        let items = vec![raw(json!({"id": 1, "userId": 2, "title": "<b>x</b>", "body": ""}))];

        let cards = render(&surface, &messages, Some(items.as_slice())).unwrap();

        assert_eq!(cards[0].id, "1");
        assert_eq!(cards[0].user_id, "2");
        assert!(!cards[0].title.contains("<b>"));
        assert_eq!(cards[0].title, "&lt;b&gt;x&lt;/b&gt;");
        assert_eq!(cards[0].body, messages.no_body);
        assert_eq!(surface.cards(), cards);
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let surface = RecordingSurface::new();
        let messages = Messages::default();
        let card = sanitize(&surface, &messages, &raw(json!({"id": 0, "title": null})));
        assert_eq!(card.id, "N/A");
        assert_eq!(card.user_id, "N/A");
        assert_eq!(card.title, messages.no_title);
        assert_eq!(card.body, messages.no_body);
    }

    #[test]
    fn test_non_string_fields_are_shown_as_text() {
        let surface = RecordingSurface::new();
        let card = sanitize(
            &surface,
            &Messages::default(),
            &raw(json!({"id": "a&b", "userId": 7, "title": 42, "body": true})),
        );
        assert_eq!(card.id, "a&amp;b");
        assert_eq!(card.user_id, "7");
        assert_eq!(card.title, "42");
        assert_eq!(card.body, "true");
    }

    #[test]
    fn test_empty_or_absent_is_empty_result() {
        let surface = RecordingSurface::new();
        let messages = Messages::default();
        assert_eq!(render(&surface, &messages, Some(&[][..])), Err(WidgetError::EmptyResult));
        assert_eq!(render(&surface, &messages, None), Err(WidgetError::EmptyResult));
        assert!(surface.cards().is_empty());
        assert_eq!(surface.append_batches(), 0);
    }

    #[test]
    fn test_cards_appended_in_one_batch_preserving_order() {
        let surface = RecordingSurface::new();
        let items: Vec<RawItem> = (1..=4).map(|id| raw(json!({"id": id}))).collect();
        render(&surface, &Messages::default(), Some(items.as_slice())).unwrap();
        let ids: Vec<String> = surface.cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(surface.append_batches(), 1);
    }

    #[test]
    fn test_stagger_reveal_is_index_proportional() {
        let surface = RecordingSurface::new();
        let scheduler = ManualScheduler::new();
        stagger_reveal(&surface, &scheduler, &WidgetConfig::default(), 3, || true);

        scheduler.advance(Duration::ZERO);
        assert_eq!(surface.revealed(), vec![0]);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(surface.revealed(), vec![0, 1]);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(surface.revealed(), vec![0, 1, 2]);
    }

    #[test]
    fn test_stale_reveal_is_skipped() {
        let surface = RecordingSurface::new();
        let scheduler = ManualScheduler::new();
        let current = Rc::new(Cell::new(true));
        let flag = current.clone();
        stagger_reveal(&surface, &scheduler, &WidgetConfig::default(), 3, move || flag.get());

        scheduler.advance(Duration::from_millis(100));
        current.set(false);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(surface.revealed(), vec![0, 1]);
    }
}
