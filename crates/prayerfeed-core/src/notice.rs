//! Single-slot notice holder.
//!
//! The prototype shows at most one toast at a time; a new message replaces
//! whatever was pending. Reading the slot clears it.

use serde::{Deserialize, Serialize};

/// At most one pending message. Last write wins; consume-once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeSlot {
    pending: Option<String>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any unread message with `message`.
    pub fn push(&mut self, message: impl Into<String>) {
        self.pending = Some(message.into());
    }

    /// Drop any unread message without reading it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Return the pending message and clear the slot.
    pub fn consume(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
