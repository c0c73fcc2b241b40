//! Notification seam.
//!
//! Every mutating operation ends in exactly one success or error
//! notification; list-fetch failures render inline instead and never pass
//! through here.

use std::sync::Mutex;
use tracing::{info, warn};

/// Sink for user-facing operation outcomes.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Production sink: notifications become structured log lines.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", message, "notification");
    }

    fn error(&self, message: &str) {
        warn!(kind = "error", message, "notification");
    }
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Recording sink for tests: keeps every notification in order.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().unwrap().clone()
    }

    /// Drains and returns the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Notification::Error(message.to_string()));
    }
}
