use crate::sources::Notifier;
use crate::Error;
use log::info;
use reqwest::blocking::Client;
use serde::Serialize;

const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends plain-text messages to a single Telegram chat through the Bot API.
pub struct TelegramNotifier {
    client: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: Client, bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, message: &str) -> Result<(), Error> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE_URL, self.bot_token);

        let response = self
            .client
            .post(url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text: message,
            })
            .send()?;

        if response.status().is_success() {
            info!("Telegram message sent successfully!");
            return Ok(());
        }

        let status = response.status();
        let body = response.text().unwrap_or_default();

        Err(Error::NotificationError(format!(
            "Failed to send message ({}). Response: {}",
            status, body
        )))
    }
}
