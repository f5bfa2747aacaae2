//! Chat delivery for poller notifications.
//!
//! [`Notifier`] wraps a [`MessageSender`] bound to one chat. Delivery faults are
//! logged and dropped: a failed notification never fails the polling cycle and
//! is not retried.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use telegram::TelegramSender;

/// Errors reported by a messaging transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("message request failed: {0}")]
    Request(String),

    #[error("messaging API rejected the message: {0}")]
    Rejected(String),
}

/// Transport capable of sending plain text to a chat.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Sends notifications to a single fixed chat.
pub struct Notifier<S> {
    sender: S,
    chat_id: String,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S, chat_id: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id: chat_id.into(),
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send `text` once. Returns whether delivery succeeded; callers may ignore it.
    pub async fn notify(&self, text: &str) -> bool {
        match self.sender.send_text(&self.chat_id, text).await {
            Ok(()) => {
                tracing::debug!(chat_id = %self.chat_id, "Message was sent");
                true
            }
            Err(e) => {
                tracing::error!(
                    chat_id = %self.chat_id,
                    error = %e,
                    "Failed to deliver notification"
                );
                false
            }
        }
    }
}
