//! # Notifications
//!
//! The basket never talks to a toast library directly. Callers hand it a
//! [`Notifier`] and it fires messages and forgets about them.
//!
//! ```text
//! ┌────────────────┐  success / info   ┌─────────────────────────────┐
//! │ basket command │ ────────────────► │ Notifier (fire-and-forget)  │
//! └────────────────┘                   │  • RecordingNotifier (tests)│
//!                                      │  • tracing / channel (app)  │
//!                                      └─────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use ts_rs::TS;

use crate::types::Serving;

/// Info message after a line is removed from the basket.
pub const ITEM_REMOVED_MESSAGE: &str = "Ürün sepetten çıkarıldı";

/// Success message after an order is confirmed.
pub const ORDER_CONFIRMED_MESSAGE: &str = "Siparişiniz alındı! Teşekkür ederiz 🎉";

/// Success message after a product is added: `Vanilyalı sepete eklendi! (Külah)`.
pub fn item_added_message(name: &str, serving: Serving) -> String {
    format!("{name} sepete eklendi! ({serving})")
}

/// A message bound for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
#[ts(export)]
pub enum Notification {
    Success(String),
    Info(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Success(text) | Notification::Info(text) => text,
        }
    }
}

/// Receiver of user-facing messages.
///
/// Delivery is fire-and-forget: implementations must not block and
/// nothing is returned to the caller.
pub trait Notifier {
    fn success(&self, message: &str);

    fn info(&self, message: &str);

    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Success(text) => self.success(text),
            Notification::Info(text) => self.info(text),
        }
    }
}

/// A shared notifier, e.g. one recorder handed to several sessions.
impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

/// Keeps every message in order. Used by tests and previews.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times `notification` was received.
    pub fn count(&self, notification: &Notification) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|n| *n == notification)
            .count()
    }

    pub fn clear(&self) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, notification: Notification) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(Notification::Info(message.to_string()));
    }
}
