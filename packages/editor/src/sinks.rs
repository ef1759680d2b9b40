//! Outbound collaborators: toast notifications and the clipboard.
//!
//! The host owns the real implementations. The session only pushes text at
//! them and ignores whatever they do with it.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives human-readable success messages
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Receives generated markup verbatim
pub trait ClipboardSink {
    fn copy(&mut self, text: &str);
}

/// Logs notifications through `tracing`; the default notification sink
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, message: &str) {
        tracing::info!(text = message, "notification");
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _message: &str) {}
}

impl ClipboardSink for NullSink {
    fn copy(&mut self, _text: &str) {}
}

/// Shared in-memory queue; clones see the same messages
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    messages: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every message received so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl NotificationSink for Recorder {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl ClipboardSink for Recorder {
    fn copy(&mut self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}
