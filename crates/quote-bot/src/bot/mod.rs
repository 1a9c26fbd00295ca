//! Quote bot
//!
//! Executes the routes produced by [`crate::router`]: builds menus, fetches
//! quotes and turns every failure into a short message followed by the
//! symbol menu. The bot holds no per-user state and can be shared across
//! concurrent sessions behind an `Arc`.
//!
//! # Example
//!
//! ```rust,ignore
//! use quote_bot::{AlphaVantageClient, BotConfig, InboundEvent, QuoteBot};
//! use std::sync::Arc;
//!
//! let config = Arc::new(BotConfig::from_env()?);
//! let source = Arc::new(AlphaVantageClient::from_config(&config)?);
//! let bot = QuoteBot::new(config, source);
//!
//! for response in bot.handle(InboundEvent::Start).await {
//!     println!("{}", response.content);
//! }
//! ```

use crate::api::{QueryParams, QuoteSource};
use crate::catalog::Symbol;
use crate::config::BotConfig;
use crate::duration::QuoteDuration;
use crate::error::Result;
use crate::interface::{BotResponse, Keyboard, QuoteResult, duration_menu, parse_quote, symbol_menu};
use crate::router::{InboundEvent, Route, route};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prompt shown after the custom-symbol button
pub const CUSTOM_SYMBOL_PROMPT: &str = "Please enter the stock symbol:";

/// Prompt shown with the symbol menu after a quote or an error
pub const MENU_AGAIN_PROMPT: &str = "Please choose another stock or type a custom symbol:";

/// Usage text for `/help`
pub const HELP_TEXT: &str = "Choose a stock from the menu or type any ticker symbol, \
then pick a duration to see its latest quote.\n\n\
/start - show the stock menu\n\
/help - show this message";

/// Stateless conversation handler
pub struct QuoteBot {
    config: Arc<BotConfig>,
    source: Arc<dyn QuoteSource>,
    symbol_menu: Keyboard,
}

impl QuoteBot {
    /// Create a bot answering from `source`
    pub fn new(config: Arc<BotConfig>, source: Arc<dyn QuoteSource>) -> Self {
        let symbol_menu = symbol_menu(config.symbols.symbols());
        Self {
            config,
            source,
            symbol_menu,
        }
    }

    /// Welcome text for `/start`
    pub fn welcome_text(&self) -> String {
        format!(
            "Welcome to {}! Please choose a stock or type a custom symbol:",
            self.config.bot_name
        )
    }

    /// Handle one inbound event.
    ///
    /// Returns the responses in order. For a button press the first response
    /// replaces the message that carried the button.
    pub async fn handle(&self, event: InboundEvent) -> Vec<BotResponse> {
        match route(&event) {
            Route::Welcome => {
                vec![BotResponse::text(self.welcome_text()).with_keyboard(self.symbol_menu.clone())]
            }
            Route::Help => vec![BotResponse::text(HELP_TEXT).with_keyboard(self.symbol_menu.clone())],
            Route::PromptCustomSymbol => vec![BotResponse::text(CUSTOM_SYMBOL_PROMPT)],
            Route::DurationMenu { symbol, custom } => {
                let content = if custom {
                    format!("Selected custom stock: {symbol}. Choose a duration:")
                } else {
                    format!("Selected {symbol}. Choose a duration:")
                };
                let menu = duration_menu(&symbol, &self.config.durations);
                vec![BotResponse::text(content).with_keyboard(menu)]
            }
            Route::FetchQuote { symbol, duration } => {
                let first = match self.quote(&symbol, duration).await {
                    Ok(quote) => BotResponse::quote(quote.to_string()),
                    Err(err) => {
                        warn!(%symbol, duration = duration.token(), error = %err, "Quote request failed");
                        BotResponse::error(err.user_message())
                    }
                };
                vec![first, self.menu_again()]
            }
            Route::Rejected(err) => {
                debug!(?event, error = %err, "Rejected input");
                vec![BotResponse::error(err.user_message()), self.menu_again()]
            }
        }
    }

    /// Fetch and format the latest quote for one selection
    pub async fn quote(&self, symbol: &Symbol, duration: QuoteDuration) -> Result<QuoteResult> {
        let params = QueryParams::new(symbol, duration, &self.config);
        let body = self.source.fetch_series(&params).await?;
        let quote = parse_quote(symbol, duration, &body)?;
        info!(%symbol, duration = duration.token(), date = %quote.date, "Quote served");
        Ok(quote)
    }

    fn menu_again(&self) -> BotResponse {
        BotResponse::text(MENU_AGAIN_PROMPT).with_keyboard(self.symbol_menu.clone())
    }
}
