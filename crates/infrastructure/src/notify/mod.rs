//! Notifier adapters.
//!
//! The application layer raises user-facing error notifications through the
//! `Notifier` port. [`TracingNotifier`] routes them into the log stream;
//! [`ChannelNotifier`] forwards them to a UI over an unbounded channel.

use tokio::sync::mpsc;

use oship_application::ports::Notifier;

/// Notifier that logs every message at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!(target: "oship::notify", %message, "user notification");
    }
}

/// Notifier that forwards messages to a consumer over a channel.
///
/// Sending never blocks. When the receiving side is gone the message is
/// dropped after a log line; losing a toast must not affect request flow.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiving end for the UI.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify_error(&self, message: &str) {
        if self.sender.send(message.to_owned()).is_err() {
            tracing::debug!(%message, "notification receiver dropped; message discarded");
        }
    }
}
