//! Telegram Bot API sender.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, MessageSender};

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends plain-text messages through the Bot API `sendMessage` method.
pub struct TelegramSender {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
}

impl TelegramSender {
    pub fn new(api_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            bot_token: bot_token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.bot_token,
            method
        )
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // without_url keeps the bot token out of the error text
            .map_err(|e| DeliveryError::Request(e.without_url().to_string()))?;

        let body: TelegramApiResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::Request(format!("invalid sendMessage response: {e}")))?;

        if !body.ok {
            return Err(DeliveryError::Rejected(body.description.unwrap_or_default()));
        }
        Ok(())
    }
}
