//! Test doubles for the surface, transport and scheduler seams

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::api::{HttpResponse, Transport};
use crate::error::WidgetError;
use crate::models::DisplayItem;
use crate::surface::Surface;
use crate::timers::{Scheduler, Task};

// ========================
// Surface
// ========================

#[derive(Debug, Default)]
struct SurfaceLog {
    trigger_enabled: bool,
    validity: String,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    cards: Vec<DisplayItem>,
    append_batches: usize,
    revealed: Vec<usize>,
}

/// Records the last value of every surface property
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_enabled(&self) -> bool {
        self.log.borrow().trigger_enabled
    }

    pub fn validity(&self) -> String {
        self.log.borrow().validity.clone()
    }

    pub fn loading(&self) -> bool {
        self.log.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.log.borrow().error.clone()
    }

    pub fn notice(&self) -> Option<String> {
        self.log.borrow().notice.clone()
    }

    pub fn cards(&self) -> Vec<DisplayItem> {
        self.log.borrow().cards.clone()
    }

    pub fn append_batches(&self) -> usize {
        self.log.borrow().append_batches
    }

    pub fn revealed(&self) -> Vec<usize> {
        self.log.borrow().revealed.clone()
    }
}

impl Surface for RecordingSurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.log.borrow_mut().trigger_enabled = enabled;
    }

    fn set_validity_message(&self, message: &str) {
        self.log.borrow_mut().validity = message.to_string();
    }

    fn set_loading(&self, visible: bool) {
        self.log.borrow_mut().loading = visible;
    }

    fn show_error(&self, message: &str) {
        self.log.borrow_mut().error = Some(message.to_string());
    }

    fn hide_error(&self) {
        self.log.borrow_mut().error = None;
    }

    fn set_notice(&self, message: Option<&str>) {
        self.log.borrow_mut().notice = message.map(str::to_string);
    }

    fn clear_cards(&self) {
        let mut log = self.log.borrow_mut();
        log.cards.clear();
        log.revealed.clear();
    }

    fn append_cards(&self, cards: Vec<DisplayItem>) {
        let mut log = self.log.borrow_mut();
        log.cards.extend(cards);
        log.append_batches += 1;
    }

    fn reveal_card(&self, index: usize) {
        self.log.borrow_mut().revealed.push(index);
    }

    // Same entities a DOM text node serializes to
    fn escape_markup(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
        out
    }
}

// ========================
// Transport
// ========================

enum Reply {
    Ready(Result<HttpResponse, WidgetError>),
    Pending(Option<oneshot::Receiver<HttpResponse>>),
}

/// Canned transport that records every requested URL
#[derive(Clone)]
pub struct MockTransport {
    reply: Rc<RefCell<Reply>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MockTransport {
    fn with(reply: Reply) -> Self {
        Self {
            reply: Rc::new(RefCell::new(reply)),
            requests: Rc::default(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::with(Reply::Ready(Ok(HttpResponse { status, body: body.to_string() })))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with(Reply::Ready(Err(WidgetError::Network(reason.to_string()))))
    }

    /// First request waits until the returned sender fires
    pub fn pending() -> (Self, oneshot::Sender<HttpResponse>) {
        let (tx, rx) = oneshot::channel();
        (Self::with(Reply::Pending(Some(rx))), tx)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, WidgetError> {
        self.requests.borrow_mut().push(url.to_string());
        let receiver = match &mut *self.reply.borrow_mut() {
            Reply::Ready(reply) => return reply.clone(),
            Reply::Pending(receiver) => receiver.take(),
        };
        match receiver {
            Some(rx) => rx.await.map_err(|_| WidgetError::Network("sender dropped".to_string())),
            None => Err(WidgetError::Network("already consumed".to_string())),
        }
    }
}

// ========================
// Scheduler
// ========================

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual clock; tasks run only inside [`ManualScheduler::advance`]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    next_seq: Rc<Cell<u64>>,
    queue: Rc<RefCell<Vec<Pending>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward and run everything that came due, in order
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let now = self.now.get();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= now)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                position.map(|i| queue.remove(i))
            };
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}
