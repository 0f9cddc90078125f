//! User-facing notices raised by cart operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Fixed notice texts.
pub mod messages {
    /// Stock can't cover the requested quantity.
    pub const OUT_OF_STOCK: &str = "requested quantity out of stock";
    /// Adding a product failed.
    pub const ADD_FAILED: &str = "error adding product";
    /// Removing a product failed.
    pub const REMOVE_FAILED: &str = "error removing product";
    /// Changing a quantity failed.
    pub const UPDATE_FAILED: &str = "error updating product quantity";
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
}

/// A message for the shopper, typically shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// An error-level notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Fire-and-forget sink for notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Forwards notices to the log at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(notice = %notice.message, "cart notice");
    }
}

/// Keeps every notice in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    /// Drain the received notices.
    pub fn take(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
