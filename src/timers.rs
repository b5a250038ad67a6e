//! Deferred Callbacks
//!
//! One-shot timers for error auto-dismiss and the staggered card reveal.

use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler: Clone + 'static {
    /// Run `task` once after `delay`; fire-and-forget
    fn defer(&self, delay: Duration, task: Task);
}

/// Browser timers via `gloo-timers`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
