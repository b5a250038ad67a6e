//! Post Feed Widget
//!
//! Fetches N posts from a paginated list endpoint and renders them as cards,
//! with input validation, loading/error feedback and a connectivity notice.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod listeners;
pub mod models;
pub mod orchestrator;
pub mod presenter;
pub mod surface;
pub mod timers;
pub mod validator;

#[cfg(test)]
mod testing;

/// Orchestrator wired to the browser surface, `fetch` and `setTimeout`
pub type WidgetOrchestrator =
    orchestrator::Orchestrator<context::WidgetContext, api::BrowserTransport, timers::TimeoutScheduler>;
