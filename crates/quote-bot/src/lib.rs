//! Menu-driven stock quote bot
//!
//! A user picks a ticker, then a reporting duration, and the bot answers with
//! the most recent point of the provider's time series. The pending selection
//! is carried entirely in button payloads, so the bot keeps no session state.
//!
//! # Architecture
//!
//! - [`router`] classifies an inbound event into the next step
//! - [`selection`] encodes and decodes the state carried in payloads
//! - [`interface::menu`] builds the symbol grid and the duration list
//! - [`api::QueryParams`] maps a selection to provider parameters
//! - [`api::AlphaVantageClient`] performs the single HTTP request
//! - [`interface::formatter`] turns the payload into a [`QuoteResult`]
//! - [`QuoteBot`] wires these together; [`platforms`] connect it to a chat
//!   transport
//!
//! # Example
//!
//! ```rust,ignore
//! use quote_bot::platforms::{TelegramBot, TelegramConfig};
//! use quote_bot::{AlphaVantageClient, BotConfig, QuoteBot};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(BotConfig::from_env()?);
//!     let source = Arc::new(AlphaVantageClient::from_config(&config)?);
//!     let bot = Arc::new(QuoteBot::new(config.clone(), source));
//!
//!     TelegramBot::new(TelegramConfig::from_bot_config(&config), bot)
//!         .run()
//!         .await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod interface;
pub mod platforms;
pub mod router;
pub mod selection;

// Re-export main types for convenience
pub use api::{AlphaVantageClient, QueryParams, QuoteSource};
pub use bot::QuoteBot;
pub use catalog::{Symbol, SymbolCatalog};
pub use config::BotConfig;
pub use duration::QuoteDuration;
pub use error::{QuoteError, Result};
pub use interface::{BotResponse, Keyboard, QuoteResult};
pub use router::{InboundEvent, Route};
pub use selection::Selection;
