//! Rendering Surface
//!
//! Operations the orchestrator and presenter drive. The browser
//! implementation is [`crate::context::WidgetContext`].

use crate::models::DisplayItem;

pub trait Surface: Clone + 'static {
    fn set_trigger_enabled(&self, enabled: bool);
    /// Native validity hint on the count input, empty string clears it
    fn set_validity_message(&self, message: &str);
    fn set_loading(&self, visible: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    /// Connectivity overlay, independent of the error region
    fn set_notice(&self, message: Option<&str>);
    fn clear_cards(&self);
    /// Insert a whole batch at once, in order
    fn append_cards(&self, cards: Vec<DisplayItem>);
    fn reveal_card(&self, index: usize);
    /// Host text-to-markup escaping
    fn escape_markup(&self, text: &str) -> String;
}

/// Escape through the DOM: assign `textContent` on a detached element and
/// read back `innerHTML`. `None` outside a browser.
pub fn dom_escape(text: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let scratch = document.create_element("div").ok()?;
    scratch.set_text_content(Some(text));
    Some(scratch.inner_html())
}
