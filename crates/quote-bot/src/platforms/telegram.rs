//! Telegram bot implementation
//!
//! Long-polling adapter over teloxide. Updates of different chats are
//! dispatched concurrently; the quote request runs on the tokio runtime and
//! never holds up other chats.

use crate::bot::QuoteBot;
use crate::config::BotConfig;
use crate::interface::{BotResponse, Keyboard};
use crate::router::InboundEvent;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::{debug, info};

/// Telegram bot configuration
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token from BotFather
    pub token: String,
}

impl TelegramConfig {
    /// Take the token from the bot configuration
    pub fn from_bot_config(config: &BotConfig) -> Self {
        Self {
            token: config.bot_token.clone(),
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Telegram bot
pub struct TelegramBot {
    config: TelegramConfig,
    quote_bot: Arc<QuoteBot>,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(config: TelegramConfig, quote_bot: Arc<QuoteBot>) -> Self {
        Self { config, quote_bot }
    }

    /// Poll for updates until interrupted with Ctrl-C
    pub async fn run(self) {
        let bot = Bot::new(self.config.token);

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(on_message))
            .branch(Update::filter_callback_query().endpoint(on_callback));

        info!("Polling Telegram for updates");
        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![self.quote_bot])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
        info!("Telegram dispatcher stopped");
    }
}

async fn on_message(bot: Bot, msg: Message, quote_bot: Arc<QuoteBot>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let event = InboundEvent::from_text(text);
    debug!(chat_id = msg.chat.id.0, ?event, "Message received");

    for response in quote_bot.handle(event).await {
        send(&bot, msg.chat.id, &response).await?;
    }
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, quote_bot: Arc<QuoteBot>) -> ResponseResult<()> {
    // Stops the client-side spinner before the quote request starts
    bot.answer_callback_query(query.id.clone()).await?;

    let (Some(payload), Some(message)) = (query.data.as_deref(), query.message.as_ref()) else {
        return Ok(());
    };
    let chat_id = message.chat().id;
    debug!(chat_id = chat_id.0, payload, "Callback received");

    let mut responses = quote_bot
        .handle(InboundEvent::Callback(payload.to_string()))
        .await
        .into_iter();

    if let Some(first) = responses.next() {
        let mut edit = bot.edit_message_text(chat_id, message.id(), &first.content);
        if let Some(keyboard) = &first.keyboard {
            edit = edit.reply_markup(markup(keyboard));
        }
        edit.await?;
    }
    for response in responses {
        send(&bot, chat_id, &response).await?;
    }
    Ok(())
}

async fn send(bot: &Bot, chat_id: ChatId, response: &BotResponse) -> ResponseResult<()> {
    let mut request = bot.send_message(chat_id, &response.content);
    if let Some(keyboard) = &response.keyboard {
        request = request.reply_markup(markup(keyboard));
    }
    request.await?;
    Ok(())
}

/// Convert a keyboard into Telegram's inline markup
pub fn markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(&button.label, &button.payload))
            .collect::<Vec<_>>()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Symbol;
    use crate::duration::QuoteDuration;
    use crate::interface::{duration_menu, symbol_menu};
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_markup_preserves_layout() {
        let symbols: Vec<Symbol> = ["AAPL", "MSFT", "KO", "T"]
            .iter()
            .map(|s| Symbol::parse(s).unwrap())
            .collect();
        let markup = markup(&symbol_menu(&symbols));

        let shape: Vec<usize> = markup.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(shape, vec![3, 1, 1]);

        let first = &markup.inline_keyboard[0][0];
        assert_eq!(first.text, "AAPL");
        assert_eq!(first.kind, InlineKeyboardButtonKind::CallbackData("AAPL".to_string()));
    }

    #[test]
    fn test_markup_duration_payloads() {
        let symbol = Symbol::parse("IBM").unwrap();
        let markup = markup(&duration_menu(&symbol, &QuoteDuration::ALL));
        let last = &markup.inline_keyboard[7][0];
        assert_eq!(last.text, "Monthly");
        assert_eq!(
            last.kind,
            InlineKeyboardButtonKind::CallbackData("IBM:monthly".to_string())
        );
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = TelegramConfig {
            token: "123456:secret".to_string(),
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}
