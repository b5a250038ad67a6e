//! UI Components
//!
//! Leptos components reading the widget store.

mod count_form;
mod post_list;
mod status_panel;

pub use count_form::CountForm;
pub use post_list::{PostCard, PostList};
pub use status_panel::StatusPanel;
