//! # Notifiers
//!
//! `Notifier` implementations for the running storefront.
//!
//! - [`TracingNotifier`]: every message becomes a log event
//! - [`ChannelNotifier`]: messages are queued for the UI to drain
//!
//! Neither waits for the message to be shown.

use dondurma_core::{Notification, Notifier};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

/// Logs notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", text = %message, "notification");
    }

    fn info(&self, message: &str) {
        info!(kind = "info", text = %message, "notification");
    }
}

/// Pushes notifications into an unbounded channel.
///
/// Sending never blocks. If the receiving side is gone the message is
/// dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiver the UI drains.
    pub fn new() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { tx }, rx)
    }

    fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("notification receiver closed, message dropped");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn success(&self, message: &str) {
        self.send(Notification::Success(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.send(Notification::Info(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier.success("eklendi");
        notifier.info("çıkarıldı");

        assert_eq!(rx.recv().await, Some(Notification::Success("eklendi".to_string())));
        assert_eq!(rx.recv().await, Some(Notification::Info("çıkarıldı".to_string())));
    }

    #[test]
    fn test_channel_notifier_ignores_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);

        notifier.success("kimse dinlemiyor");
    }

    #[test]
    fn test_tracing_notifier_is_fire_and_forget() {
        TracingNotifier.success("ok");
        TracingNotifier.info("ok");
    }
}
